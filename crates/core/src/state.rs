//! Draft-submission state machine states.

use std::fmt;

/// Progress of one drafting session, in strict forward order.
///
/// Each state is reached by exactly one UI step; [`DraftState::next`] is the
/// only legal successor. `Closed` is terminal and is entered from any state
/// when the session is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftState {
	Start,
	LoggedOut,
	LoggingIn,
	LoggedIn,
	MenuOpen,
	ComposerOpen,
	TitleSet,
	BodySet,
	Saved,
	Closed,
}

impl DraftState {
	pub const ALL: [DraftState; 10] = [
		DraftState::Start,
		DraftState::LoggedOut,
		DraftState::LoggingIn,
		DraftState::LoggedIn,
		DraftState::MenuOpen,
		DraftState::ComposerOpen,
		DraftState::TitleSet,
		DraftState::BodySet,
		DraftState::Saved,
		DraftState::Closed,
	];

	pub fn next(self) -> Option<DraftState> {
		match self {
			DraftState::Start => Some(DraftState::LoggedOut),
			DraftState::LoggedOut => Some(DraftState::LoggingIn),
			DraftState::LoggingIn => Some(DraftState::LoggedIn),
			DraftState::LoggedIn => Some(DraftState::MenuOpen),
			DraftState::MenuOpen => Some(DraftState::ComposerOpen),
			DraftState::ComposerOpen => Some(DraftState::TitleSet),
			DraftState::TitleSet => Some(DraftState::BodySet),
			DraftState::BodySet => Some(DraftState::Saved),
			DraftState::Saved => Some(DraftState::Closed),
			DraftState::Closed => None,
		}
	}

	/// The UI step that enters this state.
	pub fn step(self) -> &'static str {
		match self {
			DraftState::Start => "start",
			DraftState::LoggedOut => "open login page",
			DraftState::LoggingIn => "enter credentials",
			DraftState::LoggedIn => "submit login",
			DraftState::MenuOpen => "open post menu",
			DraftState::ComposerOpen => "open article composer",
			DraftState::TitleSet => "enter draft title",
			DraftState::BodySet => "enter article body",
			DraftState::Saved => "save draft",
			DraftState::Closed => "close session",
		}
	}
}

impl fmt::Display for DraftState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.step())
	}
}
