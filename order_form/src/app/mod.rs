pub mod event;
pub mod reducer;
pub mod render;
pub mod state;

pub use event::UiEvent;
pub use state::FormState;

use crate::settings::FormSettings;

pub struct OrderFormApp {
    pub state: FormState,
    dirty: bool,
}

impl OrderFormApp {
    pub fn new(settings: &FormSettings) -> Self {
        Self {
            state: FormState::new(settings),
            dirty: true,
        }
    }

    pub fn handle_event(&mut self, ev: UiEvent) {
        let changed = reducer::reduce(&mut self.state, ev);
        if changed {
            self.dirty = true;
        }
    }
}

impl eframe::App for OrderFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for ev in render::render(&self.state, ctx) {
            self.handle_event(ev);
        }

        // Events were applied after drawing; draw again so derived values catch up.
        if self.dirty {
            self.dirty = false;
            ctx.request_repaint();
        }
    }
}
