use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            view_size: self.core.config.view_size,
            view_start_index: self.core.model.positioner.start(),
            total_len: self.core.model.store.length(),
            visible_len: self.core.model.view.len(),
            domains: self.core.model.view.domains(),
            queued_batches: self.core.runtime.playback.len(),
            animating: self.core.runtime.playback.is_animating(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(event, context);
        }
    }

    pub(super) fn emit_domains_changed(&mut self) {
        let domains = self.core.model.view.domains();
        self.emit_plugin_event(PluginEvent::DomainsChanged {
            left: domains.left,
            right: domains.right,
        });
    }
}
