//! Session lifecycle
//!
//! A [`Session`] walks the shell through boot, login, the welcome screen
//! and the desktop. Timed steps use an injected clock (`now_ms`) so the
//! whole lifecycle is deterministic under test; the host calls
//! [`Session::tick`] once per frame.

use serde::Serialize;

use crate::config::DesktopConfig;
use crate::desktop::{DesktopController, SessionIntent, StartMenuAction};
use crate::math::Size;
use crate::types::WindowId;

/// Boot screen duration before the login screen appears
pub const BOOT_DURATION_MS: f64 = 3000.0;

/// Welcome screen duration before the desktop appears
pub const WELCOME_DURATION_MS: f64 = 2000.0;

/// Delay between entering the desktop and showing the welcome balloon
pub const BALLOON_DELAY_MS: f64 = 2000.0;

/// How long the welcome balloon stays up before hiding itself
pub const BALLOON_DURATION_MS: f64 = 10_000.0;

/// Time the shutdown dialog spends "shutting down"
pub const SHUTDOWN_DURATION_MS: f64 = 5000.0;

/// Time the shutdown dialog spends "restarting"
pub const RESTART_DURATION_MS: f64 = 1500.0;

/// Shell phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Boot,
    Login,
    Welcome,
    Desktop,
}

impl SessionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionPhase::Boot => "boot",
            SessionPhase::Login => "login",
            SessionPhase::Welcome => "welcome",
            SessionPhase::Desktop => "desktop",
        }
    }
}

/// Final choice made in the shutdown dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShutdownChoice {
    ShutDown,
    Restart,
}

impl ShutdownChoice {
    fn duration_ms(self) -> f64 {
        match self {
            ShutdownChoice::ShutDown => SHUTDOWN_DURATION_MS,
            ShutdownChoice::Restart => RESTART_DURATION_MS,
        }
    }
}

/// Shutdown dialog state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum ShutdownDialog {
    /// Waiting for a choice
    Open,
    /// A choice was made; the session resets at `due_ms`
    #[serde(rename_all = "camelCase")]
    Processing { choice: ShutdownChoice, due_ms: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Balloon {
    Hidden,
    Pending { due_ms: f64 },
    Visible { hide_at_ms: f64 },
}

/// One run of the shell, from boot to log off
pub struct Session {
    config: DesktopConfig,
    phase: SessionPhase,
    phase_started_ms: f64,
    desktop: Option<DesktopController>,
    balloon: Balloon,
    shutdown: Option<ShutdownDialog>,
}

impl Session {
    /// Start a session at the boot screen
    pub fn new(config: DesktopConfig, now_ms: f64) -> Self {
        Self {
            config,
            phase: SessionPhase::Boot,
            phase_started_ms: now_ms,
            desktop: None,
            balloon: Balloon::Hidden,
            shutdown: None,
        }
    }

    /// Current phase
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Configuration each new desktop is built from
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Update the screen size for the current and future desktops
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.config.viewport = Size::new(width, height);
        if let Some(desktop) = self.desktop.as_mut() {
            desktop.set_viewport(width, height);
        }
    }

    /// Desktop of the current session, present only in the desktop phase
    pub fn desktop(&self) -> Option<&DesktopController> {
        self.desktop.as_ref()
    }

    /// Mutable desktop of the current session
    pub fn desktop_mut(&mut self) -> Option<&mut DesktopController> {
        self.desktop.as_mut()
    }

    /// Apply due timed transitions
    ///
    /// Returns whether anything changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let mut changed = false;

        if self.phase == SessionPhase::Boot && now_ms - self.phase_started_ms >= BOOT_DURATION_MS {
            let at = self.phase_started_ms + BOOT_DURATION_MS;
            self.enter(SessionPhase::Login, at);
            changed = true;
        }

        if self.phase == SessionPhase::Welcome
            && now_ms - self.phase_started_ms >= WELCOME_DURATION_MS
        {
            let at = self.phase_started_ms + WELCOME_DURATION_MS;
            self.enter_desktop(at);
            changed = true;
        }

        if let Balloon::Pending { due_ms } = self.balloon {
            if now_ms >= due_ms {
                self.balloon = Balloon::Visible {
                    hide_at_ms: due_ms + BALLOON_DURATION_MS,
                };
                tracing::debug!("welcome balloon shown");
                changed = true;
            }
        }

        if let Balloon::Visible { hide_at_ms } = self.balloon {
            if now_ms >= hide_at_ms {
                self.balloon = Balloon::Hidden;
                tracing::debug!("welcome balloon expired");
                changed = true;
            }
        }

        if let Some(ShutdownDialog::Processing { choice, due_ms }) = self.shutdown {
            if now_ms >= due_ms {
                tracing::debug!(?choice, "shutdown complete");
                self.reset(due_ms);
                changed = true;
            }
        }

        changed
    }

    fn enter(&mut self, phase: SessionPhase, now_ms: f64) {
        tracing::debug!(from = ?self.phase, to = ?phase, "session phase change");
        self.phase = phase;
        self.phase_started_ms = now_ms;
    }

    fn enter_desktop(&mut self, now_ms: f64) {
        self.enter(SessionPhase::Desktop, now_ms);
        self.desktop = Some(DesktopController::new(self.config.clone()));
        self.balloon = Balloon::Pending {
            due_ms: now_ms + BALLOON_DELAY_MS,
        };
    }

    /// Back to the boot screen, discarding the desktop
    fn reset(&mut self, now_ms: f64) {
        self.enter(SessionPhase::Boot, now_ms);
        self.desktop = None;
        self.balloon = Balloon::Hidden;
        self.shutdown = None;
    }

    /// Log in from the login screen
    ///
    /// Returns `false` outside the login phase.
    pub fn log_in(&mut self, now_ms: f64) -> bool {
        if self.phase != SessionPhase::Login {
            return false;
        }
        self.enter(SessionPhase::Welcome, now_ms);
        true
    }

    /// End the session immediately
    pub fn log_off(&mut self, now_ms: f64) {
        if self.phase == SessionPhase::Desktop {
            self.reset(now_ms);
        }
    }

    /// Run a start menu entry, handling session entries here
    pub fn activate_start_menu(&mut self, action: StartMenuAction, now_ms: f64) {
        let intent = match self.desktop.as_mut() {
            Some(desktop) => desktop.activate_start_menu(action),
            None => return,
        };
        match intent {
            Some(SessionIntent::LogOff) => self.log_off(now_ms),
            Some(SessionIntent::ShutDown) => self.open_shutdown_dialog(),
            None => {}
        }
    }

    // =========================================================================
    // Welcome balloon
    // =========================================================================

    /// Whether the welcome balloon is showing
    pub fn is_balloon_visible(&self) -> bool {
        matches!(self.balloon, Balloon::Visible { .. })
    }

    /// Tray click: show the balloon again for a full duration
    pub fn show_balloon(&mut self, now_ms: f64) {
        if self.phase == SessionPhase::Desktop {
            self.balloon = Balloon::Visible {
                hide_at_ms: now_ms + BALLOON_DURATION_MS,
            };
        }
    }

    /// Close the balloon
    pub fn dismiss_balloon(&mut self) {
        self.balloon = Balloon::Hidden;
    }

    /// Follow a link in the balloon: dismiss it and open the window
    pub fn follow_balloon_link(&mut self, id: WindowId) {
        if !self.is_balloon_visible() {
            return;
        }
        self.dismiss_balloon();
        if let Some(desktop) = self.desktop.as_mut() {
            desktop.open_window(id);
        }
    }

    // =========================================================================
    // Shutdown dialog
    // =========================================================================

    /// Shutdown dialog state, if showing
    pub fn shutdown_dialog(&self) -> Option<ShutdownDialog> {
        self.shutdown
    }

    /// Show the shutdown dialog
    pub fn open_shutdown_dialog(&mut self) {
        if self.phase == SessionPhase::Desktop && self.shutdown.is_none() {
            self.shutdown = Some(ShutdownDialog::Open);
        }
    }

    /// Close the dialog without choosing; ignored while processing
    pub fn cancel_shutdown(&mut self) {
        if self.shutdown == Some(ShutdownDialog::Open) {
            self.shutdown = None;
        }
    }

    /// Turn the computer off
    pub fn shut_down(&mut self, now_ms: f64) -> bool {
        self.choose(ShutdownChoice::ShutDown, now_ms)
    }

    /// Restart the computer
    pub fn restart(&mut self, now_ms: f64) -> bool {
        self.choose(ShutdownChoice::Restart, now_ms)
    }

    fn choose(&mut self, choice: ShutdownChoice, now_ms: f64) -> bool {
        if self.shutdown != Some(ShutdownDialog::Open) {
            return false;
        }
        let due_ms = now_ms + choice.duration_ms();
        self.shutdown = Some(ShutdownDialog::Processing { choice, due_ms });
        tracing::debug!(?choice, due_ms, "shutdown processing");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_desktop() -> Session {
        let mut session = Session::new(DesktopConfig::default(), 0.0);
        session.tick(3000.0);
        session.log_in(3500.0);
        session.tick(5500.0);
        session
    }

    #[test]
    fn test_boot_waits_for_timer() {
        let mut session = Session::new(DesktopConfig::default(), 1000.0);
        assert!(!session.tick(3999.0));
        assert_eq!(session.phase(), SessionPhase::Boot);
        assert!(session.tick(4000.0));
        assert_eq!(session.phase(), SessionPhase::Login);
        assert!(!session.tick(4001.0));
    }

    #[test]
    fn test_log_in_only_from_login_screen() {
        let mut session = Session::new(DesktopConfig::default(), 0.0);
        assert!(!session.log_in(10.0));
        session.tick(3000.0);
        assert!(session.log_in(3100.0));
        assert_eq!(session.phase(), SessionPhase::Welcome);
    }

    #[test]
    fn test_welcome_leads_to_fresh_desktop() {
        let session = at_desktop();
        assert_eq!(session.phase(), SessionPhase::Desktop);
        let desktop = session.desktop().unwrap();
        assert_eq!(desktop.active_window_id(), None);
        assert_eq!(desktop.z_counter(), 10);
    }

    #[test]
    fn test_balloon_appears_after_delay() {
        let mut session = at_desktop();
        assert!(!session.is_balloon_visible());
        session.tick(7499.0);
        assert!(!session.is_balloon_visible());
        assert!(session.tick(7500.0));
        assert!(session.is_balloon_visible());

        session.dismiss_balloon();
        assert!(!session.is_balloon_visible());
        session.show_balloon(8000.0);
        assert!(session.is_balloon_visible());
    }

    #[test]
    fn test_balloon_hides_after_duration() {
        let mut session = at_desktop();
        session.tick(7500.0);
        assert!(session.is_balloon_visible());

        assert!(!session.tick(17_499.0));
        assert!(session.is_balloon_visible());
        assert!(session.tick(17_500.0));
        assert!(!session.is_balloon_visible());
        assert!(!session.tick(67_000.0));
        assert!(!session.is_balloon_visible());
    }

    #[test]
    fn test_tray_click_restarts_balloon_timer() {
        let mut session = at_desktop();
        session.tick(7500.0);
        session.show_balloon(15_000.0);

        session.tick(24_999.0);
        assert!(session.is_balloon_visible());
        session.tick(25_000.0);
        assert!(!session.is_balloon_visible());
    }

    #[test]
    fn test_late_tick_shows_and_expires_balloon() {
        let mut session = at_desktop();
        assert!(session.tick(60_000.0));
        assert!(!session.is_balloon_visible());
    }

    #[test]
    fn test_balloon_link_opens_window() {
        let mut session = at_desktop();
        session.tick(8000.0);
        session.follow_balloon_link(WindowId::Projects);
        assert!(!session.is_balloon_visible());
        assert_eq!(
            session.desktop().unwrap().active_window_id(),
            Some(WindowId::Projects)
        );
    }

    #[test]
    fn test_log_off_discards_desktop() {
        let mut session = at_desktop();
        session
            .desktop_mut()
            .unwrap()
            .open_window(WindowId::About);
        session.activate_start_menu(StartMenuAction::LogOff, 9000.0);

        assert_eq!(session.phase(), SessionPhase::Boot);
        assert!(session.desktop().is_none());
        session.tick(12000.0);
        assert_eq!(session.phase(), SessionPhase::Login);
    }

    #[test]
    fn test_shutdown_dialog_cancel() {
        let mut session = at_desktop();
        session.activate_start_menu(StartMenuAction::ShutDown, 6000.0);
        assert_eq!(session.shutdown_dialog(), Some(ShutdownDialog::Open));
        session.cancel_shutdown();
        assert_eq!(session.shutdown_dialog(), None);
        assert_eq!(session.phase(), SessionPhase::Desktop);
    }

    #[test]
    fn test_processing_blocks_other_choices() {
        let mut session = at_desktop();
        session.open_shutdown_dialog();
        assert!(session.restart(6000.0));
        assert!(!session.shut_down(6100.0));
        session.cancel_shutdown();
        assert_eq!(
            session.shutdown_dialog(),
            Some(ShutdownDialog::Processing {
                choice: ShutdownChoice::Restart,
                due_ms: 7500.0
            })
        );

        session.tick(7499.0);
        assert_eq!(session.phase(), SessionPhase::Desktop);
        session.tick(7500.0);
        assert_eq!(session.phase(), SessionPhase::Boot);
        assert_eq!(session.shutdown_dialog(), None);
    }

    #[test]
    fn test_viewport_carries_into_next_desktop() {
        let mut session = at_desktop();
        session.set_viewport(600.0, 900.0);
        assert!(session.desktop().unwrap().config().is_compact());

        session.log_off(6000.0);
        session.tick(9000.0);
        session.log_in(9000.0);
        session.tick(11_000.0);
        assert!(session.desktop().unwrap().config().is_compact());
    }

    #[test]
    fn test_shut_down_takes_five_seconds() {
        let mut session = at_desktop();
        session.open_shutdown_dialog();
        session.shut_down(10_000.0);
        session.tick(14_999.0);
        assert_eq!(session.phase(), SessionPhase::Desktop);
        session.tick(15_000.0);
        assert_eq!(session.phase(), SessionPhase::Boot);
    }
}
