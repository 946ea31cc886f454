//! Which actions each page offers, by role and participation.

use crate::models::yoga_session::ClassSession;

/// Actions on the session list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListActions {
    pub create: bool,
    pub edit: bool,
    pub detail: bool,
}

/// Actions on a session's detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailActions {
    pub delete: bool,
    pub participate: bool,
    pub unparticipate: bool,
}

/// Elements of the account page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeActions {
    pub admin_badge: bool,
    pub delete_account: bool,
}

pub fn list_actions(is_admin: bool) -> ListActions {
    ListActions {
        create: is_admin,
        edit: is_admin,
        detail: true,
    }
}

/// Admins may delete; everyone else may toggle their own participation.
pub fn detail_actions(is_admin: bool, user_id: i64, session: &ClassSession) -> DetailActions {
    let participating = session.has_participant(user_id);
    DetailActions {
        delete: is_admin,
        participate: !is_admin && !participating,
        unparticipate: !is_admin && participating,
    }
}

pub fn me_actions(is_admin: bool) -> MeActions {
    MeActions {
        admin_badge: is_admin,
        delete_account: !is_admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session_with(users: &[i64]) -> ClassSession {
        let now = Utc::now();
        ClassSession {
            id: 1,
            name: "Yoga session".to_string(),
            description: "A relaxing yoga session".to_string(),
            date: now,
            teacher_id: 1,
            users: users.iter().copied().collect(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn admin_manages_and_never_participates() {
        let session = session_with(&[1, 2, 3]);
        let actions = detail_actions(true, 1, &session);
        assert!(actions.delete);
        assert!(!actions.participate && !actions.unparticipate);

        assert_eq!(list_actions(true), ListActions { create: true, edit: true, detail: true });
        assert_eq!(me_actions(true), MeActions { admin_badge: true, delete_account: false });
    }

    #[test]
    fn user_sees_exactly_one_participation_button() {
        let session = session_with(&[1, 2, 3]);
        let enrolled = detail_actions(false, 2, &session);
        assert!(enrolled.unparticipate && !enrolled.participate && !enrolled.delete);

        let outsider = detail_actions(false, 5, &session);
        assert!(outsider.participate && !outsider.unparticipate);

        assert_eq!(list_actions(false), ListActions { create: false, edit: false, detail: true });
        assert_eq!(me_actions(false), MeActions { admin_badge: false, delete_account: true });
    }
}
