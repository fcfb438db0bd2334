//! Builds a small process tree, edits it, and runs a few searches.
//!
//! Run with `RUST_LOG=horizon_outline=debug` to see the search sessions.

use horizon_outline::item::{
    DrawInfo, DrawStyle, ImageIndex, ItemDisplay, ItemEdit, ItemHost, ItemStructure, Labels,
    TreeItem,
};
use horizon_outline::{FoundItems, Outline, OutlineTreeDebug, TreeFormatOptions};
use tracing_subscriber::EnvFilter;

/// A named group of parameters.
struct Unit {
    name: &'static str,
    params: Vec<(&'static str, String)>,
}

impl ItemDisplay for Unit {
    fn display_text(&self) -> Labels {
        [self.name.to_string(), format!("{} parameters", self.params.len())]
    }

    fn image_index(&self) -> ImageIndex {
        ImageIndex::Object
    }
}

impl ItemEdit for Unit {}

impl ItemStructure for Unit {
    fn create_children(&self) -> Option<Vec<Box<dyn TreeItem>>> {
        Some(
            self.params
                .iter()
                .map(|(name, value)| {
                    Box::new(Param {
                        name: *name,
                        value: value.clone(),
                    }) as Box<dyn TreeItem>
                })
                .collect(),
        )
    }

    fn is_insertable(&self) -> bool {
        true
    }

    fn insert(&mut self) -> Option<Box<dyn TreeItem>> {
        self.params.push(("Spare", "-".to_string()));
        Some(Box::new(Param {
            name: "Spare",
            value: "-".to_string(),
        }))
    }
}

impl ItemHost for Unit {
    fn is_draw_on_host_page(&self) -> bool {
        true
    }

    fn objects_to_draw(&self) -> Option<Vec<DrawInfo>> {
        Some(vec![DrawInfo::new(self.name, DrawStyle::GreenBox)])
    }
}

/// A single editable value.
struct Param {
    name: &'static str,
    value: String,
}

impl ItemDisplay for Param {
    fn display_text(&self) -> Labels {
        [self.name.to_string(), self.value.clone()]
    }

    fn image_index(&self) -> ImageIndex {
        ImageIndex::Parameter
    }
}

impl ItemEdit for Param {
    fn is_editable(&self) -> bool {
        true
    }

    fn editable_part(&self) -> [i32; 2] {
        [-1, 1]
    }

    fn edit_text(&self) -> Labels {
        self.display_text()
    }

    fn set_value(&mut self, value: &str) -> bool {
        if value.trim().is_empty() {
            return false;
        }
        self.value = value.trim().to_string();
        true
    }
}

impl ItemStructure for Param {
    fn is_movable(&self) -> bool {
        true
    }

    fn move_up(&mut self, _index: usize) -> bool {
        true
    }
}

impl ItemHost for Param {}

fn main() -> horizon_outline::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut outline = Outline::new();
    let tank = outline.insert_root(Box::new(Unit {
        name: "Tank T1",
        params: vec![
            ("Level setpoint", "80".to_string()),
            ("Drain delay", "-".to_string()),
        ],
    }));
    let pump = outline.insert_root(Box::new(Unit {
        name: "Pump P1",
        params: vec![("Speed", "-".to_string())],
    }));
    outline.link_all()?;

    let spare = outline.insert(tank).unwrap_or(tank);
    outline.add_parent(tank, None)?;
    outline.set_value_changed_handler(spare, |id| println!("value changed on {id:?}"));
    outline.set_value(spare, " 12 ");

    let debug = OutlineTreeDebug::with_options(TreeFormatOptions::detailed());
    let mut found = FoundItems::new();
    for (needle, hide_empty) in [("level", true), ("delay", true), ("delay", false), ("", true)] {
        for root in [tank, pump] {
            let rows = outline.visible_nodes(root, needle, hide_empty, &mut found);
            println!(
                "search {needle:?} (hide empty: {hide_empty}) under {:?}: {} rows, {} found",
                outline.display_text(root)[0],
                rows.len(),
                found.len()
            );
            print!("{}", debug.format_search(&outline, root, &found)?);
        }
    }

    if let Some(draw) = outline.objects_to_draw(tank) {
        println!("draw on host page: {draw:?}");
    }
    Ok(())
}
