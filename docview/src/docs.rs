/// One titled section of the embedded documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
}

const SECTIONS: &[Section] = &[
    Section {
        title: "Welcome",
        body: "DocView renders a fixed set of documentation pages in a single \
scrollable view. The navigation panel on the left lists every section; pick one \
to jump straight to it. Once you scroll past the top of the page a floating \
button appears in the bottom-right corner that takes you back to the top in a \
single jump.\n\nNothing here is persisted: closing the window forgets the scroll \
position, the panel state, and the theme choice.",
    },
    Section {
        title: "Navigation panel",
        body: "The panel slides out from the left edge at a fixed width and can \
be toggled from the View menu or with Ctrl+B. Toggling an open panel closes it; \
toggling a closed one opens it. The panel is purely a table of contents, so \
closing it never loses any state.\n\nSelecting a section scrolls the document \
view so that the section heading sits at the top of the viewport. The selection \
does not close the panel, which makes it easy to hop between sections while \
comparing them.",
    },
    Section {
        title: "Back to top",
        body: "Long pages are easier to leave than to climb. As soon as the view \
is scrolled more than a few pixels past the top, a small floating button appears \
anchored to the bottom-right corner of the window. Activating it resets the \
scroll position to zero immediately; there is no smooth-scroll animation, the \
view simply jumps.\n\nThe button hides itself again once the view is back at (or \
near) the top, so it never covers content you are actually reading.",
    },
    Section {
        title: "Keyboard shortcuts",
        body: "Ctrl+B toggles the navigation panel. The shortcut is consumed \
before the menu is drawn, so it works even while a menu is open. All other \
interaction is pointer-driven: menus, the section list, and the back-to-top \
button.\n\nShortcuts follow the platform convention reported by egui, so on \
macOS the menu displays the Command variant automatically.",
    },
    Section {
        title: "Theming",
        body: "DocView starts with the Catppuccin Frappé palette and exposes a \
theme switch in the bottom status bar. The switch follows the system dark/light \
preference by default and can be pinned to either mode.\n\nTheme changes apply \
to the whole window at once, including the navigation panel and the floating \
button overlay.",
    },
    Section {
        title: "About",
        body: "DocView is a small demonstration host for the egui-scrollnav \
widgets: a scroll-position watcher driving a back-to-top control, and a \
slide-out panel registry with toggle semantics. Help → About opens the project \
repository in your browser.\n\nThe widgets carry no global state; everything \
they know is handed to them each frame by this application.",
    },
];

pub fn sections() -> &'static [Section] {
    SECTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_present() {
        assert!(!sections().is_empty());
        for section in sections() {
            assert!(!section.title.is_empty());
            assert!(!section.body.is_empty());
        }
    }

    #[test]
    fn test_section_titles_are_unique() {
        let mut titles: Vec<_> = sections().iter().map(|s| s.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), sections().len());
    }
}
