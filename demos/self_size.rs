use view_preferences::{Host, Rect, Result, ViewNode};

fn main() -> Result<()> {
    view_preferences::init_logging();

    let label = ViewNode::new(Rect::from_xywh(20.0, 20.0, 120.0, 18.0))
        .act_on_self_size(|size| println!("label is {} x {}", size.x, size.y));
    let label_id = label.id();

    let mut host = Host::new(ViewNode::new(Rect::from_xywh(0.0, 0.0, 640.0, 480.0)).child(label));
    host.run_pass();

    for width in [120.0, 160.0, 160.0, 96.0] {
        if let Some(label) = host.root_mut().find_mut(label_id) {
            label.set_frame(Rect::from_xywh(20.0, 20.0, width, 18.0));
        }
        let report = host.run_pass();
        println!("pass {}: {} notified", host.passes(), report.notifications);
    }

    Ok(())
}
