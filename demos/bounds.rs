use view_preferences::{BoundsAnchorType, Host, HostConfig, Rect, Result, ViewNode, vec2};

const CONFIG: &str = "traversal: pre_order\nlog_passes: true\n";

fn row(x: f32) -> ViewNode {
    ViewNode::new(Rect::from_xywh(x, 10.0, 60.0, 24.0)).report(BoundsAnchorType::Last)
}

fn main() -> Result<()> {
    view_preferences::init_logging();

    let config = HostConfig::from_yaml(CONFIG)?;
    let list = ViewNode::new(Rect::from_xywh(40.0, 40.0, 400.0, 100.0))
        .child(row(0.0))
        .child(row(70.0))
        .child(row(140.0))
        .background_bounds(BoundsAnchorType::Last, |bounds| {
            ViewNode::new(bounds.translate(vec2(0.0, bounds.size.y)))
        })
        .act_on_bounds(BoundsAnchorType::Last, |anchor| {
            println!("last row at {:?}", anchor.absolute());
        });

    let mut host = Host::new(ViewNode::new(Rect::from_xywh(0.0, 0.0, 800.0, 600.0)).child(list))
        .with_config(config);

    host.run_pass();

    for list in host.root().children() {
        for underline in list.dependent_content() {
            println!("underline at {:?}", underline.frame());
        }
    }

    Ok(())
}
