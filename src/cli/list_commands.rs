use crate::api::RecordApi;
use crate::cli::context::CLIContext;
use crate::cli::forms::Form;
use crate::view::{SortDirection, StatusFilter};

pub fn render<R: Form, A: RecordApi<R>>(ctx: &CLIContext<R, A>) {
    let view = ctx.collection.view();
    let page = view.visible_page();

    let mut header = format!(
        "{} - page {}/{} ({} matching of {})",
        ctx.title,
        page.current_page,
        page.total_pages,
        page.total_items,
        view.len()
    );
    if !view.query().trim().is_empty() {
        header.push_str(&format!(" search: \"{}\"", view.query().trim()));
    }
    if view.status_filter() != StatusFilter::All {
        header.push_str(&format!(" filter: {}", view.status_filter().display_name()));
    }
    if view.sort_direction() != SortDirection::None {
        header.push_str(&format!(" sort: {}", view.sort_direction().display_name()));
    }
    println!();
    println!("{}", header);

    if page.items.is_empty() {
        if view.is_empty() {
            println!("  Nothing here yet. Use 'add' to create one.");
        } else {
            println!("  No matches.");
        }
        println!();
        return;
    }

    for record in &page.items {
        let marker = if record.is_visible() { "-" } else { "+" };
        println!("  {} [{}] {}", marker, record.id(), record.primary_label());
        if record.is_visible() {
            for (label, value) in record.details() {
                println!("        {}: {}", label, value);
            }
        }
    }

    let mut nav = Vec::new();
    if page.has_prev() {
        nav.push("'prev'");
    }
    if page.has_next() {
        nav.push("'next'");
    }
    if !nav.is_empty() {
        println!("  ({})", nav.join(" / "));
    }
    println!();
}

pub fn next<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>) {
    let view = ctx.collection.view_mut();
    let before = view.current_page();
    if view.next_page() == before {
        println!("Already on the last page.");
    }
}

pub fn prev<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>) {
    let view = ctx.collection.view_mut();
    let before = view.current_page();
    if view.prev_page() == before {
        println!("Already on the first page.");
    }
}

pub fn page<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>, args: &str) {
    match args.trim().parse::<i64>() {
        Ok(n) => {
            let landed = ctx.collection.view_mut().set_page(n);
            if landed as i64 != n {
                println!("Showing page {}.", landed);
            }
            ctx.mark_stale();
        }
        Err(_) => println!("Usage: page <number>"),
    }
}

pub fn search<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>, args: &str) {
    ctx.collection.view_mut().set_query(args);
}

pub fn filter<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>, args: &str) {
    match StatusFilter::parse(args) {
        Some(status) => ctx.collection.view_mut().set_status_filter(status),
        None => println!("Usage: filter all|visible|hidden"),
    }
}

pub fn sort<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>) {
    let direction = ctx.collection.view_mut().toggle_sort_direction();
    println!("Sorted {}.", direction.display_name());
}
