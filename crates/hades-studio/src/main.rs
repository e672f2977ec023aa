//! Headless driver for the hades editor GUI.
//!
//! Plays a scripted input sequence against the editor panels, logs what every
//! frame produced, and round-trips the window layout through a RON file.

mod editor;
mod script;

use anyhow::Context;
use hades_engine::logging::{init_logging, LoggingConfig};
use hades_gui::layout_store;
use hades_gui::prelude::*;

use editor::EditorState;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("hades studio (headless)");

    let config = GuiConfig::new(Viewport::new(1024.0, 640.0));
    let mut gui = Gui::new(config, Box::new(MonospaceMetrics::default()));
    let mut queue = EventQueue::new();
    let mut clock = FrameClock::new();
    let mut state = EditorState::default();

    for (i, step) in script::demo().iter().enumerate() {
        step.queue(&mut queue);
        gui.new_frame(&mut queue, clock.tick());
        editor::declare(&mut gui, &mut state);
        let out = gui.end_frame();
        log::debug!(
            "frame {i}: {step:?} -> {} layers, {} items, cursor {:?}",
            out.layers.len(),
            out.item_count(),
            out.cursor
        );
        for layer in &out.layers {
            log::trace!("  {} {:?}: {} items", layer.name, layer.rect, layer.draw_list.len());
        }
    }

    log::info!(
        "entity '{}' shape {} copies {}; {} spawned",
        state.entity_name,
        editor::SHAPES[state.shape],
        state.copies,
        state.spawned.len()
    );

    let path = std::env::temp_dir().join("hades-studio-layout.ron");
    let records = gui.save_layout();
    layout_store::save(&path, &records).context("saving window layout")?;
    let restored = layout_store::load(&path).context("reloading window layout")?;
    anyhow::ensure!(restored == records, "layout changed across a save/load round trip");

    let mut replay = Gui::new(GuiConfig::new(Viewport::new(1024.0, 640.0)), Box::new(MonospaceMetrics::default()));
    replay.load_layout(&restored);
    for r in &restored {
        log::info!("restored '{}' at {:?}", r.name, replay.window_rect(&r.name));
    }
    Ok(())
}
