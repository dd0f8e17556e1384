use super::*;

#[test]
fn mount_disables_submit_when_empty() {
    let mut view = SelectionView::new(3);
    assert_eq!(view.mount(0), ViewUpdate { submit_disabled: true, auto_submit: false });
}

#[test]
fn mount_at_capacity_does_not_submit() {
    let mut view = SelectionView::new(3);
    let update = view.mount(3);
    assert!(!update.submit_disabled);
    assert!(!update.auto_submit);
}

#[test]
fn render_enables_submit_once_something_is_selected() {
    let mut view = SelectionView::new(3);
    view.mount(0);
    assert!(!view.render(1).submit_disabled);
    assert!(view.render(0).submit_disabled);
}

#[test]
fn render_submits_on_transition_to_capacity() {
    let mut view = SelectionView::new(3);
    view.mount(2);
    assert!(view.render(3).auto_submit);
}

#[test]
fn render_does_not_resubmit_at_unchanged_capacity() {
    let mut view = SelectionView::new(3);
    view.mount(2);
    assert!(view.render(3).auto_submit);
    assert!(!view.render(3).auto_submit);
}

#[test]
fn render_submits_again_after_leaving_and_reentering_capacity() {
    let mut view = SelectionView::new(3);
    view.mount(3);
    assert!(!view.render(2).auto_submit);
    assert!(view.render(3).auto_submit);
}

#[test]
fn render_below_capacity_never_submits() {
    let mut view = SelectionView::new(3);
    view.mount(0);
    for count in [1, 2, 1, 0, 2] {
        assert!(!view.render(count).auto_submit);
    }
}
