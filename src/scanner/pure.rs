pub mod shortcut_id;
