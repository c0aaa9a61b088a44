use tauri::{
    menu::{AboutMetadata, Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle, Wry,
};

use crate::{menu_actions, ABOUT_COPYRIGHT, APP_TITLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuGroup {
    Application,
    File,
    Edit,
}

/// macOS routes clipboard shortcuts through the menu bar, so the shell
/// must carry an Edit group there; other platforms handle them natively.
pub(crate) fn editing_shortcuts_supported() -> bool {
    cfg!(target_os = "macos")
}

fn menu_layout(editing_shortcuts_supported: bool) -> Vec<MenuGroup> {
    if editing_shortcuts_supported {
        vec![MenuGroup::Application, MenuGroup::File, MenuGroup::Edit]
    } else {
        vec![MenuGroup::File]
    }
}

pub(crate) fn build_app_menu(app_handle: &AppHandle) -> tauri::Result<Menu<Wry>> {
    let menu = Menu::new(app_handle)?;
    for group in menu_layout(editing_shortcuts_supported()) {
        match group {
            MenuGroup::Application => menu.append(&build_application_group(app_handle)?)?,
            MenuGroup::File => menu.append(&build_file_group(app_handle)?)?,
            MenuGroup::Edit => menu.append(&build_edit_group(app_handle)?)?,
        }
    }
    Ok(menu)
}

fn build_application_group(app_handle: &AppHandle) -> tauri::Result<Submenu<Wry>> {
    let about = PredefinedMenuItem::about(
        app_handle,
        None,
        Some(AboutMetadata {
            name: Some(APP_TITLE.to_string()),
            copyright: Some(ABOUT_COPYRIGHT.to_string()),
            icon: Some(tauri::include_image!("./icons/icon.png")),
            ..Default::default()
        }),
    )?;
    Submenu::with_items(app_handle, APP_TITLE, true, &[&about])
}

fn build_file_group(app_handle: &AppHandle) -> tauri::Result<Submenu<Wry>> {
    let quit_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_QUIT,
        "Quit",
        true,
        Some("CmdOrCtrl+Q"),
    )?;
    Submenu::with_items(app_handle, "File", true, &[&quit_item])
}

fn build_edit_group(app_handle: &AppHandle) -> tauri::Result<Submenu<Wry>> {
    Submenu::with_items(
        app_handle,
        "Edit",
        true,
        &[
            &PredefinedMenuItem::undo(app_handle, None)?,
            &PredefinedMenuItem::redo(app_handle, None)?,
            &PredefinedMenuItem::separator(app_handle)?,
            &PredefinedMenuItem::cut(app_handle, None)?,
            &PredefinedMenuItem::copy(app_handle, None)?,
            &PredefinedMenuItem::paste(app_handle, None)?,
            &PredefinedMenuItem::select_all(app_handle, None)?,
        ],
    )
}
