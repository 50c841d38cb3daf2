mod content;
mod menubar;
mod nav_panel;
