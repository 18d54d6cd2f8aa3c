use crate::api::RecordApi;
use crate::cli::context::CLIContext;
use crate::cli::forms::Form;
use crate::error::MktError;
use crate::model::Id;
use crate::ops::Reconciled;

fn not_found<R: Form>(id: Id<R>) -> MktError {
    MktError::NotFound {
        entity_type: R::ENTITY.to_string(),
        id: id.to_string(),
    }
}

pub fn add<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>, args: &str) {
    let draft = {
        let mut prompt = |p: &str| ctx.prompt(p);
        match R::read_draft(args, &mut prompt) {
            Some(Ok(draft)) => draft,
            Some(Err(e)) => {
                ctx.print_error(&e);
                return;
            }
            None => return,
        }
    };

    match ctx.collection.create(draft) {
        Ok(Reconciled::Confirmed(id)) | Ok(Reconciled::KeptLocal(id)) => {
            let label = ctx
                .collection
                .view()
                .get(id)
                .map(|r| r.primary_label().to_string())
                .unwrap_or_default();
            println!("Added {} [{}]", label, id);
        }
        Ok(Reconciled::Skipped) => {}
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>, args: &str) {
    let Some(id) = ctx.parse_id(args, "delete <id>") else {
        return;
    };
    let Some(label) = ctx
        .collection
        .view()
        .get(id)
        .map(|r| r.primary_label().to_string())
    else {
        ctx.print_error(&not_found(id));
        return;
    };

    if !ctx.confirm(&format!("Delete {}? (y/n): ", label)) {
        return;
    }

    // The record may have gone while the prompt was open; delete skips it.
    match ctx.collection.delete(id) {
        Ok(Reconciled::Skipped) => println!("{} was already removed.", label),
        Ok(_) => println!("Deleted {}", label),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn copy<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>, args: &str) {
    let Some(id) = ctx.parse_id(args, "copy <id>") else {
        return;
    };
    match ctx.collection.copy(id) {
        Some(copy_id) => println!("Copied to [{}]", copy_id),
        None => ctx.print_error(&not_found(id)),
    }
}

pub fn toggle<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>, args: &str) {
    let Some(id) = ctx.parse_id(args, "toggle <id>") else {
        return;
    };
    if ctx.collection.toggle_visibility(id).is_none() {
        ctx.print_error(&not_found(id));
    }
}

/// Search and tab stay local; the server always sends the full list.
pub fn refresh<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>) {
    match ctx.collection.reload() {
        Ok(count) => println!("Loaded {} record(s).", count),
        Err(e) => ctx.print_error(&e),
    }
}
