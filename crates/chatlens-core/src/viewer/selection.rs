//! Selection state machine: which user and conversation the operator is
//! looking at.

use thiserror::Error;
use uuid::Uuid;

/// Errors from invalid selection transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A conversation can only be selected once a user is.
    #[error("cannot select a conversation without a selected user")]
    NoUserSelected,
}

/// Current position in the user -> conversation drill-down.
///
/// Selecting a user always resets any selected conversation, so
/// `ConversationSelected` can never refer to a previously selected user's
/// chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    NoSelection,
    UserSelected(Uuid),
    ConversationSelected { user_id: Uuid, chat_id: Uuid },
}

impl Selection {
    /// Transition: pick a user. Drops any selected conversation.
    pub fn select_user(self, user_id: Uuid) -> Selection {
        Selection::UserSelected(user_id)
    }

    /// Transition: pick a conversation under the currently selected user.
    pub fn select_conversation(self, chat_id: Uuid) -> Result<Selection, SelectionError> {
        match self {
            Selection::NoSelection => Err(SelectionError::NoUserSelected),
            Selection::UserSelected(user_id)
            | Selection::ConversationSelected { user_id, .. } => {
                Ok(Selection::ConversationSelected { user_id, chat_id })
            }
        }
    }

    /// The selected user, if any.
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Selection::NoSelection => None,
            Selection::UserSelected(user_id)
            | Selection::ConversationSelected { user_id, .. } => Some(*user_id),
        }
    }

    /// The selected conversation, if any.
    pub fn chat_id(&self) -> Option<Uuid> {
        match self {
            Selection::ConversationSelected { chat_id, .. } => Some(*chat_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_user_resets_conversation() {
        let user_a = Uuid::now_v7();
        let user_b = Uuid::now_v7();
        let chat = Uuid::now_v7();

        let sel = Selection::default()
            .select_user(user_a)
            .select_conversation(chat)
            .unwrap();
        assert_eq!(sel.chat_id(), Some(chat));

        let sel = sel.select_user(user_b);
        assert_eq!(sel, Selection::UserSelected(user_b));
        assert_eq!(sel.chat_id(), None);
    }

    #[test]
    fn test_conversation_requires_user() {
        let err = Selection::default()
            .select_conversation(Uuid::now_v7())
            .unwrap_err();
        assert_eq!(err, SelectionError::NoUserSelected);
    }

    #[test]
    fn test_reselecting_conversation_keeps_user() {
        let user = Uuid::now_v7();
        let chat_a = Uuid::now_v7();
        let chat_b = Uuid::now_v7();

        let sel = Selection::default()
            .select_user(user)
            .select_conversation(chat_a)
            .unwrap()
            .select_conversation(chat_b)
            .unwrap();
        assert_eq!(sel.user_id(), Some(user));
        assert_eq!(sel.chat_id(), Some(chat_b));
    }
}
