pub(crate) const MENU_QUIT: &str = "menu_quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    Quit,
}

pub(crate) fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_QUIT => Some(MenuAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_the_quit_item() {
        assert_eq!(action_from_menu_id(MENU_QUIT), Some(MenuAction::Quit));
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
    }

    #[test]
    fn action_from_menu_id_ignores_predefined_item_ids() {
        // Edit-menu items are predefined and handled natively; they must
        // never reach the quit path.
        assert_eq!(action_from_menu_id("copy"), None);
        assert_eq!(action_from_menu_id("paste"), None);
    }
}
