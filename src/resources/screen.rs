//! Screen resources.
//!
//! These track which screen is shown and any transition requested by a hook
//! or callback. The frame loop applies a pending transition after the
//! scheduler, animation and fear passes, so a hook can never tear down the
//! world it is running in.

use bevy_ecs::prelude::Resource;

/// Screens the game can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Title,
    InGame,
    GameOver,
    HappyEnd,
}

/// Representation of a requested transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextScreens {
    #[default]
    Unchanged,
    Pending(Screen),
    Quit,
}

/// Intent to change to a new screen.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct NextScreen {
    next: NextScreens,
}

impl NextScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> NextScreens {
        self.next
    }

    /// Request a transition to `screen`. A pending quit is kept.
    pub fn set(&mut self, screen: Screen) {
        if self.next != NextScreens::Quit {
            self.next = NextScreens::Pending(screen);
        }
    }

    pub fn quit(&mut self) {
        self.next = NextScreens::Quit;
    }

    /// Take the current request, leaving [`NextScreens::Unchanged`] unless it
    /// was a quit.
    pub fn take(&mut self) -> NextScreens {
        match self.next {
            NextScreens::Quit => NextScreens::Quit,
            other => {
                self.next = NextScreens::Unchanged;
                other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_resets_pending() {
        let mut next = NextScreen::new();
        next.set(Screen::GameOver);
        assert_eq!(next.take(), NextScreens::Pending(Screen::GameOver));
        assert_eq!(next.take(), NextScreens::Unchanged);
    }

    #[test]
    fn test_quit_is_sticky() {
        let mut next = NextScreen::new();
        next.quit();
        next.set(Screen::InGame);
        assert_eq!(next.take(), NextScreens::Quit);
        assert_eq!(next.get(), NextScreens::Quit);
    }
}
