use std::{cell::RefCell, rc::Rc};

use view_preferences::{
    Anchor, BoundsAnchorType, Channel, FIRST_BOUNDS, Host, LAST_BOUNDS, Rect, SIZE, Traversal,
    ViewNode,
    preference::{Contributions, Entry, SubscriptionState},
    vec2,
};

fn r(x: f32) -> Anchor {
    Anchor::capture(Rect::from_xywh(x, x, 10.0, 10.0))
}

fn bounds_pass(values: &[Option<Anchor>]) -> (Contributions, Contributions) {
    let mut first = Contributions::new();
    let mut last = Contributions::new();
    for v in values {
        first.push(Entry::new(&FIRST_BOUNDS, *v));
        last.push(Entry::new(&LAST_BOUNDS, *v));
    }
    (first, last)
}

#[test]
fn first_and_last_bounds_skip_absent_reports() {
    let (first, last) = bounds_pass(&[None, None, Some(r(1.0)), Some(r(2.0))]);
    assert_eq!(first.all().fold(&FIRST_BOUNDS), Some(r(1.0)));
    assert_eq!(last.all().fold(&LAST_BOUNDS), Some(r(2.0)));
}

#[test]
fn size_keeps_the_first_report() {
    let mut c = Contributions::new();
    c.push(Entry::new(&SIZE, vec2(10.0, 20.0)));
    c.push(Entry::new(&SIZE, vec2(30.0, 40.0)));
    assert_eq!(c.all().fold(&SIZE), vec2(10.0, 20.0));
}

#[test]
fn channels_are_isolated_in_one_pass() {
    let mut c = Contributions::new();
    c.push(Entry::new(&LAST_BOUNDS, Some(r(5.0))));
    c.push(Entry::new(&SIZE, vec2(1.0, 2.0)));

    assert_eq!(c.all().fold(&FIRST_BOUNDS), None);
    assert_eq!(c.all().fold(&LAST_BOUNDS), Some(r(5.0)));
    assert_eq!(c.all().fold(&SIZE), vec2(1.0, 2.0));
}

#[test]
fn no_reports_means_no_dependent_content() {
    let root = ViewNode::new(Rect::from_xywh(0.0, 0.0, 100.0, 100.0))
        .child(ViewNode::new(Rect::from_xywh(0.0, 0.0, 10.0, 10.0)))
        .background_bounds(BoundsAnchorType::Last, ViewNode::new)
        .background_by_bounds(ViewNode::new);
    let mut host = Host::new(root);

    host.run_pass();
    assert_eq!(host.root().dependent_content().count(), 0);
    assert!(
        host.root()
            .subscription_states()
            .all(|s| s == SubscriptionState::Pending)
    );
}

#[test]
fn later_pass_notifies_new_last_bounds_once() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();

    let first = ViewNode::new(Rect::from_xywh(0.0, 0.0, 10.0, 10.0)).report(BoundsAnchorType::Last);
    let second = ViewNode::new(Rect::from_xywh(20.0, 0.0, 10.0, 10.0)).report(BoundsAnchorType::Last);
    let second_id = second.id();

    let root = ViewNode::new(Rect::from_xywh(0.0, 0.0, 100.0, 100.0))
        .child(first)
        .child(second)
        .act_on_bounds(BoundsAnchorType::Last, move |a| {
            sink.borrow_mut().push(a.absolute())
        });
    let mut host = Host::new(root);

    host.run_pass();
    assert_eq!(*seen.borrow(), vec![Rect::from_xywh(20.0, 0.0, 10.0, 10.0)]);

    // the last reporter moves; its new bounds arrive exactly once
    if let Some(node) = host.root_mut().find_mut(second_id) {
        node.set_frame(Rect::from_xywh(50.0, 60.0, 10.0, 10.0));
    }
    let report = host.run_pass();
    assert_eq!(report.notifications, 1);
    host.run_pass();

    assert_eq!(
        *seen.borrow(),
        vec![
            Rect::from_xywh(20.0, 0.0, 10.0, 10.0),
            Rect::from_xywh(50.0, 60.0, 10.0, 10.0),
        ]
    );
    assert_eq!(host.passes(), 3);
}

#[test]
fn first_bounds_survive_later_reporters() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();

    let root = ViewNode::new(Rect::from_xywh(0.0, 0.0, 100.0, 100.0))
        .child(ViewNode::unmeasured().report(BoundsAnchorType::First))
        .child(ViewNode::new(Rect::from_xywh(1.0, 1.0, 5.0, 5.0)).report(BoundsAnchorType::First))
        .child(ViewNode::new(Rect::from_xywh(9.0, 9.0, 5.0, 5.0)).report(BoundsAnchorType::First))
        .act_on_bounds(BoundsAnchorType::First, move |a| {
            sink.borrow_mut().push(a.absolute())
        });
    let mut host = Host::new(root);

    host.run_pass();
    host.run_pass();
    assert_eq!(*seen.borrow(), vec![Rect::from_xywh(1.0, 1.0, 5.0, 5.0)]);
}

#[test]
fn self_size_follows_layout_changes() {
    let sizes = Rc::new(RefCell::new(Vec::new()));
    let sink = sizes.clone();

    let mut host = Host::new(
        ViewNode::new(Rect::from_xywh(0.0, 0.0, 80.0, 20.0))
            .act_on_self_size(move |s| sink.borrow_mut().push(*s)),
    );

    host.run_pass();
    host.root_mut().set_frame(Rect::from_xywh(0.0, 0.0, 120.0, 20.0));
    host.run_pass();
    host.run_pass();

    assert_eq!(*sizes.borrow(), vec![vec2(80.0, 20.0), vec2(120.0, 20.0)]);
}

#[test]
fn self_size_is_own_size_in_post_order() {
    let sizes = Rc::new(RefCell::new(Vec::new()));
    let sink = sizes.clone();

    let mut host = Host::new(
        ViewNode::new(Rect::from_xywh(0.0, 0.0, 100.0, 50.0))
            .child(ViewNode::new(Rect::from_xywh(0.0, 0.0, 10.0, 10.0)).act_on_self_size(|_| {}))
            .act_on_self_size(move |s| sink.borrow_mut().push(*s)),
    )
    .with_traversal(Traversal::PostOrder);

    host.run_pass();
    assert_eq!(*sizes.borrow(), vec![vec2(100.0, 50.0)]);
}

#[test]
fn user_channels_sharing_a_name_do_not_mix() {
    static WIDEST: Channel<f32> =
        Channel::custom("user.width", || 0.0, |acc, next| *acc = acc.max(next));
    static NARROWEST: Channel<f32> =
        Channel::custom("user.width", || 0.0, |acc, next| *acc = acc.min(next));

    let widest = Rc::new(RefCell::new(Vec::new()));
    let narrowest = Rc::new(RefCell::new(Vec::new()));
    let (w, n) = (widest.clone(), narrowest.clone());

    let mut host = Host::new(
        ViewNode::new(Rect::ZERO)
            .child(ViewNode::new(Rect::ZERO).preference(&WIDEST, 30.0))
            .child(ViewNode::new(Rect::ZERO).preference(&WIDEST, 70.0))
            .child(ViewNode::new(Rect::ZERO).preference(&NARROWEST, 5.0))
            .on_change(&WIDEST, move |v| w.borrow_mut().push(*v))
            .on_change(&NARROWEST, move |v| n.borrow_mut().push(*v)),
    );

    host.run_pass();
    assert_eq!(*widest.borrow(), vec![70.0]);
    assert_eq!(*narrowest.borrow(), vec![5.0]);
}

#[test]
fn dependent_content_tracks_reporter() {
    let reporter = ViewNode::new(Rect::from_xywh(10.0, 10.0, 30.0, 30.0)).report_bounds();
    let reporter_id = reporter.id();
    let mut host = Host::new(
        ViewNode::new(Rect::from_xywh(100.0, 100.0, 200.0, 200.0))
            .child(reporter)
            .background_by_bounds(|bounds| ViewNode::new(bounds.translate(vec2(-2.0, -2.0)))),
    );

    host.run_pass();
    let frames: Vec<_> = host.root().dependent_content().filter_map(|n| n.frame()).collect();
    assert_eq!(frames, vec![Rect::from_xywh(8.0, 8.0, 30.0, 30.0)]);

    if let Some(node) = host.root_mut().find_mut(reporter_id) {
        node.invalidate_frame();
    }
    host.run_pass();
    assert_eq!(host.root().dependent_content().count(), 0);
}
