pub mod get_menu;
