use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

use marketeer::error::MktError;
use marketeer::model::*;
use marketeer::view::*;

fn campaign(id: i64, name: &str) -> Campaign {
    Campaign::from_draft(Id::new(id), CampaignDraft::named(name))
}

/// Seven campaigns C1..C7 in insertion order; only C3 mentions winter.
fn seven() -> CollectionView<Campaign> {
    let records = (1..=7)
        .map(|i| {
            let name = if i == 3 {
                "C3 Winter Sale".to_string()
            } else {
                format!("C{}", i)
            };
            campaign(i, &name)
        })
        .collect();
    CollectionView::with_records(5, records).unwrap()
}

fn labels(page: &VisiblePage<'_, Campaign>) -> Vec<String> {
    page.items.iter().map(|c| c.name.clone()).collect()
}

fn snapshot(view: &CollectionView<Campaign>) -> Vec<Campaign> {
    view.records().to_vec()
}

// ==========================================================================
// CONSTRUCTION
// ==========================================================================

#[test]
fn zero_page_size_is_rejected() {
    let result = CollectionView::<Campaign>::new(0);
    assert!(matches!(result, Err(MktError::NonPositive { .. })));
}

#[test]
fn empty_view_has_one_empty_page() {
    let view = CollectionView::<Campaign>::new(5).unwrap();
    let page = view.visible_page();
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.current_page, 1);
}

#[test]
fn defaults_are_unfiltered_and_unsorted() {
    let view = CollectionView::<Campaign>::new(5).unwrap();
    assert_eq!(view.query(), "");
    assert_eq!(view.status_filter(), StatusFilter::All);
    assert_eq!(view.sort_direction(), SortDirection::None);
    assert_eq!(view.page_size(), 5);
}

// ==========================================================================
// SCENARIOS
// ==========================================================================

#[test]
fn scenario_a_paginates_in_insertion_order() {
    let mut view = seven();
    let page = view.visible_page();
    assert_eq!(labels(&page), vec!["C1", "C2", "C3 Winter Sale", "C4", "C5"]);
    assert_eq!(page.total_pages, 2);

    assert_eq!(view.set_page(2), 2);
    let page = view.visible_page();
    assert_eq!(labels(&page), vec!["C6", "C7"]);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn scenario_b_search_is_case_insensitive() {
    let mut view = seven();
    view.set_query("winter");
    let page = view.visible_page();
    assert_eq!(labels(&page), vec!["C3 Winter Sale"]);
    assert_eq!(page.total_pages, 1);

    view.set_query("WINTER");
    assert_eq!(view.visible_page().items.len(), 1);
}

#[test]
fn scenario_c_visibility_moves_records_between_tabs() {
    let mut view = seven();
    view.toggle_visibility(Id::new(2));
    view.toggle_visibility(Id::new(5));

    view.set_status_filter(StatusFilter::Hidden);
    let hidden: Vec<i64> = view.visible_page().items.iter().map(|c| c.id.value).collect();
    assert_eq!(hidden, vec![2, 5]);

    view.toggle_visibility(Id::new(5));
    let hidden: Vec<i64> = view.visible_page().items.iter().map(|c| c.id.value).collect();
    assert_eq!(hidden, vec![2]);

    view.set_status_filter(StatusFilter::Visible);
    let page = view.visible_page();
    assert_eq!(page.total_items, 6);
    assert!(page.items.iter().all(|c| c.visible));
    assert!(page.items.iter().any(|c| c.id == Id::new(5)));
}

#[test]
fn scenario_d_deleting_last_item_on_page_two_clamps() {
    let records = (1..=6).map(|i| campaign(i, &format!("C{}", i))).collect();
    let mut view = CollectionView::with_records(5, records).unwrap();
    view.set_page(2);
    assert_eq!(labels(&view.visible_page()), vec!["C6"]);

    view.delete(Id::new(6));
    assert_eq!(view.current_page(), 1);
    let page = view.visible_page();
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 5);
}

// ==========================================================================
// PROPERTIES
// ==========================================================================

#[test]
fn p1_p2_pagination_totals_and_clamping() {
    for total in 0..40usize {
        for size in 1..9usize {
            let expected = std::cmp::max(1, (total + size - 1) / size);
            for requested in [i64::MIN, -1, 0, 1, 3, 99, i64::MAX] {
                let w = pagination::compute(total, NonZeroUsize::new(size).unwrap(), requested);
                assert_eq!(w.total_pages, expected);
                assert!((1..=expected).contains(&w.clamped_page));
            }
        }
    }
}

#[test]
fn p3_filtering_is_pure() {
    let view = seven();
    for record in view.records() {
        let first = filter::matches(record, "c", StatusFilter::All);
        let second = filter::matches(record, "c", StatusFilter::All);
        assert_eq!(first, second);
    }
    let before = snapshot(&view);
    let _ = view.visible_page();
    let _ = view.visible_page();
    assert_eq!(snapshot(&view), before);
}

#[test]
fn p4_deleting_unknown_id_changes_nothing() {
    let mut view = seven();
    let before = snapshot(&view);
    assert!(view.delete(Id::new(999)).is_none());
    assert_eq!(snapshot(&view), before);
}

#[test]
fn p5_copy_adds_exactly_one_with_fresh_id() {
    let mut view = seven();
    let existing: Vec<Id<Campaign>> = view.records().iter().map(|c| c.id).collect();

    let copy_id = view.copy(Id::new(4)).unwrap();

    assert_eq!(view.len(), 8);
    assert!(!existing.contains(&copy_id));
    let first = &view.records()[0];
    assert_eq!(first.id, copy_id);
    assert_eq!(first.name, format!("C4{}", COPY_SUFFIX));
    assert_eq!(view.get(Id::new(4)).unwrap().name, "C4");
}

#[test]
fn p6_create_then_delete_round_trips() {
    let mut view = seven();
    let before = snapshot(&view);

    let id = view.create(CampaignDraft::named("Temporary")).id();
    assert_eq!(view.records()[0].id, id);
    assert_eq!(view.len(), 8);

    view.delete(id);
    assert_eq!(snapshot(&view), before);
}

// ==========================================================================
// OPERATIONS
// ==========================================================================

#[test]
fn create_inserts_visible_record_at_front() {
    let mut view = seven();
    let created = view.create(CampaignDraft::named("Fresh")).clone();
    assert!(created.visible);
    assert_eq!(view.records()[0], created);
    assert_eq!(labels(&view.visible_page())[0], "Fresh");
}

#[test]
fn created_ids_are_unique_after_deletes() {
    let mut view = CollectionView::<Campaign>::new(5).unwrap();
    let mut seen = Vec::new();
    for i in 0..20 {
        let id = view.create(CampaignDraft::named(format!("N{}", i))).id();
        assert!(!seen.contains(&id));
        seen.push(id);
        if i % 2 == 0 {
            view.delete(id);
        }
    }
}

#[test]
fn created_ids_never_collide_with_hydrated_ids() {
    let mut view = CollectionView::<Campaign>::new(5).unwrap();
    let far = i64::MAX / 8;
    view.hydrate(vec![campaign(far, "From server")]);
    let id = view.create(CampaignDraft::named("Local")).id();
    assert!(id.value > far);
}

#[test]
fn create_and_copy_after_hydrating_max_id() {
    let mut view = CollectionView::<Campaign>::new(5).unwrap();
    view.hydrate(vec![campaign(i64::MAX, "Edge")]);

    let created = view.create(CampaignDraft::named("Local")).id();
    let copied = view.copy(Id::new(i64::MAX)).unwrap();

    let mut ids: Vec<i64> = view.records().iter().map(|c| c.id.value).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert_ne!(created, copied);
    assert!(view.get(Id::new(i64::MAX)).is_some());
}

#[test]
fn hydrate_keeps_expand_state_of_known_records() {
    let mut view = seven();
    view.toggle_visibility(Id::new(2));

    view.hydrate(vec![campaign(2, "C2 renamed"), campaign(9, "New")]);

    assert!(!view.get(Id::new(2)).unwrap().visible);
    assert_eq!(view.get(Id::new(2)).unwrap().name, "C2 renamed");
    assert!(view.get(Id::new(9)).unwrap().visible);
}

#[test]
fn query_filter_and_sort_reset_page() {
    let mut view = seven();
    view.set_page(2);
    view.set_query("");
    assert_eq!(view.current_page(), 1);

    view.set_page(2);
    view.set_status_filter(StatusFilter::All);
    assert_eq!(view.current_page(), 1);

    view.set_page(2);
    view.toggle_sort_direction();
    assert_eq!(view.current_page(), 1);
}

#[test]
fn sort_toggle_cycles_two_states_after_first_tap() {
    let mut view = seven();
    assert_eq!(view.toggle_sort_direction(), SortDirection::Ascending);
    assert_eq!(view.toggle_sort_direction(), SortDirection::Descending);
    assert_eq!(view.toggle_sort_direction(), SortDirection::Ascending);
}

#[test]
fn descending_sort_reverses_labels() {
    let records = vec![campaign(1, "bravo"), campaign(2, "Alpha"), campaign(3, "charlie")];
    let mut view = CollectionView::with_records(5, records).unwrap();
    view.toggle_sort_direction();
    let page = view.visible_page();
    assert_eq!(labels(&page), vec!["Alpha", "bravo", "charlie"]);

    view.toggle_sort_direction();
    let page = view.visible_page();
    assert_eq!(labels(&page), vec!["charlie", "bravo", "Alpha"]);
    assert_eq!(view.records()[0].name, "bravo");
}

#[test]
fn set_page_clamps_out_of_range() {
    let mut view = seven();
    assert_eq!(view.set_page(0), 1);
    assert_eq!(view.set_page(-5), 1);
    assert_eq!(view.set_page(50), 2);
    assert_eq!(view.visible_page().current_page, 2);
}

#[test]
fn next_and_prev_stop_at_edges() {
    let mut view = seven();
    assert_eq!(view.prev_page(), 1);
    assert_eq!(view.next_page(), 2);
    assert_eq!(view.next_page(), 2);
}

#[test]
fn visible_page_clamps_stale_page_without_mutating() {
    let mut view = seven();
    view.set_status_filter(StatusFilter::Visible);
    view.set_page(2);
    view.toggle_visibility(Id::new(6));
    view.toggle_visibility(Id::new(7));

    // Five visible records now fit on one page.
    let page = view.visible_page();
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(view.current_page(), 2);
}

#[test]
fn toggle_unknown_id_is_noop() {
    let mut view = seven();
    let before = snapshot(&view);
    assert_eq!(view.toggle_visibility(Id::new(404)), None);
    assert_eq!(view.copy(Id::new(404)), None);
    assert_eq!(snapshot(&view), before);
}

#[test]
fn toggle_reports_new_state() {
    let mut view = seven();
    assert_eq!(view.toggle_visibility(Id::new(1)), Some(false));
    assert_eq!(view.toggle_visibility(Id::new(1)), Some(true));
}

#[test]
fn hydrate_drops_duplicate_ids_and_resets_page() {
    let mut view = seven();
    view.set_page(2);
    view.hydrate(vec![campaign(10, "A"), campaign(11, "B"), campaign(10, "A again")]);
    assert_eq!(view.len(), 2);
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.get(Id::new(10)).unwrap().name, "A");
}

#[test]
fn restore_puts_record_back_in_place() {
    let mut view = seven();
    let before = snapshot(&view);
    let index = view.position_of(Id::new(3)).unwrap();
    let removed = view.delete(Id::new(3)).unwrap();
    assert!(view.restore(index, removed.clone()));
    assert_eq!(snapshot(&view), before);
    assert!(!view.restore(0, removed));
}

#[test]
fn replace_keeps_position_and_expand_state() {
    let mut view = seven();
    view.toggle_visibility(Id::new(2));
    let confirmed = campaign(200, "C2 confirmed");
    assert!(view.replace(Id::new(2), confirmed));

    assert_eq!(view.position_of(Id::new(200)), Some(1));
    assert!(view.get(Id::new(2)).is_none());
    assert!(!view.get(Id::new(200)).unwrap().visible);
}

#[test]
fn replace_refuses_id_collision() {
    let mut view = seven();
    assert!(!view.replace(Id::new(2), campaign(3, "clash")));
    assert_eq!(view.get(Id::new(2)).unwrap().name, "C2");
}

// ==========================================================================
// SUBSCRIPTIONS
// ==========================================================================

#[test]
fn subscribers_see_every_change() {
    let mut view = seven();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let sub = view.subscribe(move |e: &ViewEvent<Campaign>| sink.borrow_mut().push(e.clone()));

    view.set_query("c");
    let copy = view.copy(Id::new(1)).unwrap();
    view.toggle_visibility(Id::new(1));
    view.delete(Id::new(999));

    assert_eq!(
        *events.borrow(),
        vec![
            ViewEvent::QueryChanged,
            ViewEvent::Copied { source: Id::new(1), copy },
            ViewEvent::VisibilityToggled { id: Id::new(1), visible: false },
        ]
    );

    assert!(view.unsubscribe(sub));
    view.set_query("");
    assert_eq!(events.borrow().len(), 3);
}

#[test]
fn set_page_to_same_page_is_silent() {
    let mut view = seven();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    view.subscribe(move |_: &ViewEvent<Campaign>| *sink.borrow_mut() += 1);
    view.set_page(1);
    view.set_page(-3);
    assert_eq!(*count.borrow(), 0);
    view.set_page(2);
    assert_eq!(*count.borrow(), 1);
}
