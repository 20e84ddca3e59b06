use eframe::egui;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FullscreenError {
    #[error("fullscreen is disabled for this session")]
    Denied,
    #[error("the window backend does not report fullscreen support")]
    Unsupported,
}

/// Whether the presentation is allowed to take over the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FullscreenPolicy {
    #[default]
    Allow,
    Deny,
}

impl FullscreenPolicy {
    pub fn from_allowed(allowed: bool) -> Self {
        if allowed { Self::Allow } else { Self::Deny }
    }
}

/// The viewport element the controller expands to fill the display.
///
/// Requests are fire-and-forget: an `Ok` means the request was issued, not that the
/// window system honoured it.
pub trait FullscreenHost {
    fn is_fullscreen(&self) -> bool;
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;
    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError>;
}

/// Fullscreen host backed by the eframe root viewport.
///
/// Commands are queued and flushed by the app after the input pass, since sending
/// viewport commands inside `ctx.input()` deadlocks on the input lock.
#[derive(Debug)]
pub struct ViewportFullscreen {
    policy: FullscreenPolicy,
    /// Last fullscreen state reported by the backend; `None` when unreported.
    reported: Option<bool>,
    pending: Vec<egui::ViewportCommand>,
}

impl ViewportFullscreen {
    pub fn new(policy: FullscreenPolicy) -> Self {
        Self {
            policy,
            reported: Some(false),
            pending: Vec::new(),
        }
    }

    /// Refresh the backend-reported state. Call once per frame before handling input.
    pub fn sync(&mut self, ctx: &egui::Context) {
        self.reported = ctx.input(|i| i.viewport().fullscreen);
    }

    pub fn flush(&mut self, ctx: &egui::Context) {
        for cmd in self.pending.drain(..) {
            ctx.send_viewport_cmd(cmd);
        }
    }

    fn check_available(&self) -> Result<(), FullscreenError> {
        if self.policy == FullscreenPolicy::Deny {
            return Err(FullscreenError::Denied);
        }
        if self.reported.is_none() {
            return Err(FullscreenError::Unsupported);
        }
        Ok(())
    }

    #[cfg(test)]
    fn pending(&self) -> &[egui::ViewportCommand] {
        &self.pending
    }
}

impl FullscreenHost for ViewportFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.reported.unwrap_or(false)
    }

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.check_available()?;
        self.pending.push(egui::ViewportCommand::Fullscreen(true));
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        if self.reported.is_none() {
            return Err(FullscreenError::Unsupported);
        }
        self.pending.push(egui::ViewportCommand::Fullscreen(false));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_queues_command() {
        let mut host = ViewportFullscreen::new(FullscreenPolicy::Allow);
        host.request_fullscreen().unwrap();
        assert_eq!(host.pending(), &[egui::ViewportCommand::Fullscreen(true)]);
    }

    #[test]
    fn test_denied_policy_rejects_request() {
        let mut host = ViewportFullscreen::new(FullscreenPolicy::Deny);
        assert_eq!(host.request_fullscreen(), Err(FullscreenError::Denied));
        assert!(host.pending().is_empty());
    }

    #[test]
    fn test_unreported_backend_is_unsupported() {
        let mut host = ViewportFullscreen::new(FullscreenPolicy::Allow);
        host.reported = None;
        assert_eq!(host.request_fullscreen(), Err(FullscreenError::Unsupported));
        assert_eq!(host.exit_fullscreen(), Err(FullscreenError::Unsupported));
        assert!(!host.is_fullscreen());
    }

    #[test]
    fn test_exit_allowed_under_deny_policy() {
        let mut host = ViewportFullscreen::new(FullscreenPolicy::Deny);
        host.reported = Some(true);
        assert!(host.is_fullscreen());
        host.exit_fullscreen().unwrap();
        assert_eq!(host.pending(), &[egui::ViewportCommand::Fullscreen(false)]);
    }
}
