//! Integration tests for the title area: routing, labels, and deferred layout.

mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::{doc, doc_ref, init_tracing, Call, FakeDocument, FakeWorkbench};
use lite_edit_input::{Key, KeyEvent, MouseButton, MouseEvent, MouseEventKind, ScrollDelta};
use lite_edit_tabs::{
    calculate_tab_width, BreadcrumbsControl, Color, ColorToken, Dimension, DocumentRef, DragTransfer,
    EditorActionsToolbar, GroupId, OpenOptions, TabCloseButton, TabDecorations, TabInput, TabSizing, TabState,
    TabStripKind, TabsContext, Theme, TitleCoordinator,
};

const GROUP: GroupId = GroupId(1);

fn ctx<'a>(workbench: &'a mut FakeWorkbench, theme: &'a Theme) -> TabsContext<'a> {
    TabsContext::new(workbench, theme)
}

fn coordinator() -> TitleCoordinator {
    TitleCoordinator::with_transfer(GROUP, Rc::new(DragTransfer::default()))
}

/// `count` documents named file1.rs.. in /p. Every tab is 118px wide.
fn files(count: u64) -> (Vec<Rc<FakeDocument>>, Vec<DocumentRef>) {
    let docs: Vec<Rc<FakeDocument>> = (1..=count).map(|i| doc(i, &format!("file{i}.rs"), "/p")).collect();
    let refs = docs.iter().map(doc_ref).collect();
    (docs, refs)
}

/// A coordinator synced to `refs`, laid out at 300px and scrolled to the
/// active (last) tab.
fn laid_out(refs: &[DocumentRef], workbench: &mut FakeWorkbench, theme: &Theme) -> TitleCoordinator {
    let mut title = coordinator();
    let last = refs.last().cloned().expect("documents");
    title.open_document(&last, &mut ctx(workbench, theme));
    title.layout(Some(Dimension::new(300.0, 35.0)), &ctx(workbench, theme));
    title.animation_frame(&ctx(workbench, theme));
    title
}

#[test]
fn test_opening_sixth_document_binds_widgets_in_order() {
    init_tracing();
    let theme = Theme::default_dark();
    let (_docs, refs) = files(5);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[4], &mut ctx(&mut workbench, &theme));
    assert_eq!(title.strip(TabStripKind::Normal).len(), 5);

    let sixth = doc_ref(&doc(6, "file6.rs", "/p"));
    workbench.push(GROUP, sixth.clone());
    title.open_document(&sixth, &mut ctx(&mut workbench, &theme));

    let strip = title.strip(TabStripKind::Normal);
    assert_eq!(strip.len(), 6);
    assert_eq!(strip.labels().len(), 6);
    let group_ids = workbench.document_ids(GROUP);
    for (i, tab) in strip.tabs().iter().enumerate() {
        assert_eq!(tab.name, format!("file{}.rs", i + 1));
        assert_eq!(strip.documents()[i].id().0, group_ids[i]);
    }
    assert!(strip.tabs()[5].is_active());
    assert!(!strip.tabs()[4].is_active());
    assert!(title.strip(TabStripKind::HardPinned).is_empty());
}

#[test]
fn test_closing_document_removes_tail_widget_and_rebinds() {
    let theme = Theme::default_dark();
    let (_docs, refs) = files(4);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[3], &mut ctx(&mut workbench, &theme));

    workbench.remove(GROUP, refs[1].id());
    title.close_document(&refs[1], &mut ctx(&mut workbench, &theme));

    let names: Vec<&str> = title
        .strip(TabStripKind::Normal)
        .tabs()
        .iter()
        .map(|tab| tab.name.as_str())
        .collect();
    assert_eq!(names, ["file1.rs", "file3.rs", "file4.rs"]);
}

#[test]
fn test_close_all_clears_both_strips() {
    let theme = Theme::default_dark();
    let (docs, refs) = files(3);
    docs[0].hard_pinned.set(true);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[0], &mut ctx(&mut workbench, &theme));
    title.open_document(&refs[2], &mut ctx(&mut workbench, &theme));
    assert_eq!(title.strip(TabStripKind::HardPinned).len(), 1);
    assert_eq!(title.strip(TabStripKind::Normal).len(), 2);

    workbench.group_mut(GROUP).documents.clear();
    title.close_all_documents(&mut ctx(&mut workbench, &theme));

    assert!(title.strip(TabStripKind::HardPinned).is_empty());
    assert!(title.strip(TabStripKind::Normal).is_empty());
    assert!(title.strip(TabStripKind::Normal).labels().is_empty());
}

#[test]
fn test_duplicate_names_get_disambiguating_descriptions() {
    let theme = Theme::default_dark();
    let refs: Vec<DocumentRef> = vec![
        doc_ref(&doc(1, "main.rs", "/a")),
        doc_ref(&doc(2, "main.rs", "/b")),
        doc_ref(&doc(3, "util.rs", "/c")),
    ];
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[2], &mut ctx(&mut workbench, &theme));

    let descriptions: Vec<&str> = title
        .strip(TabStripKind::Normal)
        .tabs()
        .iter()
        .map(|tab| tab.description.as_str())
        .collect();
    assert_eq!(descriptions, ["/a", "/b", ""]);
    assert_eq!(title.strip(TabStripKind::Normal).tabs()[0].aria_label, "main.rs, tab");
    assert_eq!(title.strip(TabStripKind::Normal).tabs()[0].title, "/a/main.rs");
}

#[test]
fn test_labels_are_disambiguated_across_strips() {
    let theme = Theme::default_dark();
    let first = doc(1, "main.rs", "/a");
    first.hard_pinned.set(true);
    let refs: Vec<DocumentRef> = vec![doc_ref(&first), doc_ref(&doc(2, "main.rs", "/b"))];
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[0], &mut ctx(&mut workbench, &theme));
    title.open_document(&refs[1], &mut ctx(&mut workbench, &theme));

    assert_eq!(title.strip(TabStripKind::HardPinned).tabs()[0].description, "/a");
    assert_eq!(title.strip(TabStripKind::Normal).tabs()[0].description, "/b");
}

#[test]
fn test_label_change_from_other_strip_resizes_tabs() {
    let theme = Theme::default_dark();
    let refs: Vec<DocumentRef> = vec![doc_ref(&doc(1, "main.rs", "/aa")), doc_ref(&doc(2, "x.rs", "/aa"))];
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    for document in &refs {
        title.open_document(document, &mut ctx(&mut workbench, &theme));
    }
    assert_eq!(title.strip(TabStripKind::Normal).tabs()[0].width, 110.0);

    let pinned = doc(3, "main.rs", "/bb");
    pinned.hard_pinned.set(true);
    let pinned = doc_ref(&pinned);
    workbench.push(GROUP, pinned.clone());
    title.open_document(&pinned, &mut ctx(&mut workbench, &theme));

    let decorations = TabDecorations {
        close_button: TabCloseButton::Right,
        sizing: TabSizing::Fit,
        has_icon_theme: false,
    };
    let expected = calculate_tab_width("main.rs", "/aa", &decorations, 8.0);
    assert_eq!(expected, 142.0);

    let normal = title.strip(TabStripKind::Normal);
    assert_eq!(normal.tabs()[0].description, "/aa");
    assert_eq!(normal.tabs()[0].width, expected);
    assert_eq!(normal.tabs()[1].offset_left, expected);
    assert_eq!(normal.content_width(), expected + normal.tabs()[1].width);
}

#[test]
fn test_hard_pinned_tabs_stack_with_sticky_offsets() {
    let theme = Theme::default_dark();
    let (docs, refs) = files(3);
    docs[0].hard_pinned.set(true);
    docs[1].hard_pinned.set(true);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    for document in &refs {
        title.open_document(document, &mut ctx(&mut workbench, &theme));
    }

    let hard = title.strip(TabStripKind::HardPinned);
    assert_eq!(hard.len(), 2);
    assert!(hard.tabs().iter().all(|tab| tab.state.contains(TabState::HARD_PINNED)));
    assert_eq!(hard.tabs()[0].sticky_offset, 0.0);
    assert_eq!(hard.tabs()[1].sticky_offset, 118.0);

    let normal = title.strip(TabStripKind::Normal);
    assert_eq!(normal.len(), 1);
    assert_eq!(normal.tabs()[0].name, "file3.rs");
    assert_eq!(normal.tabs()[0].sticky_offset, 0.0);
}

#[test]
fn test_layout_reveals_active_tab() {
    let theme = Theme::default_dark();
    let (_docs, refs) = files(9);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let title = laid_out(&refs, &mut workbench, &theme);

    let strip = title.strip(TabStripKind::Normal);
    assert_eq!(strip.content_width(), 9.0 * 118.0);
    assert_eq!(strip.layout_passes(), 1);
    // The last tab's right edge sits at the viewport's right edge
    assert_eq!(strip.scrollbar().scroll_left(), 9.0 * 118.0 - 300.0);
}

#[test]
fn test_layout_requests_coalesce_into_one_pass() {
    let theme = Theme::default_dark();
    let (_docs, refs) = files(3);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[2], &mut ctx(&mut workbench, &theme));

    title.layout(Some(Dimension::new(300.0, 35.0)), &ctx(&mut workbench, &theme));
    title.layout(Some(Dimension::new(320.0, 35.0)), &ctx(&mut workbench, &theme));
    assert!(title.strip(TabStripKind::Normal).is_layout_pending());

    title.animation_frame(&ctx(&mut workbench, &theme));
    title.animation_frame(&ctx(&mut workbench, &theme));

    let strip = title.strip(TabStripKind::Normal);
    assert_eq!(strip.layout_passes(), 1);
    assert_eq!(strip.scrollbar().viewport_width(), 320.0);
}

#[test]
fn test_layout_without_active_tab_in_strip_schedules_nothing() {
    let theme = Theme::default_dark();
    let (_docs, refs) = files(2);
    let mut workbench = FakeWorkbench::with_group(&refs);
    workbench.group_mut(GROUP).active = None;
    let mut title = coordinator();
    title.open_document(&refs[1], &mut ctx(&mut workbench, &theme));

    title.layout(Some(Dimension::new(300.0, 35.0)), &ctx(&mut workbench, &theme));
    assert!(!title.strip(TabStripKind::Normal).is_layout_pending());
    assert_eq!(
        title.strip(TabStripKind::Normal).dimension(),
        Some(Dimension::new(300.0, 35.0))
    );
}

#[test]
fn test_dispose_cancels_pending_layout() {
    let theme = Theme::default_dark();
    let (_docs, refs) = files(3);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[2], &mut ctx(&mut workbench, &theme));
    title.layout(Some(Dimension::new(300.0, 35.0)), &ctx(&mut workbench, &theme));
    assert!(title.strip(TabStripKind::Normal).is_layout_pending());

    title.dispose();
    title.animation_frame(&ctx(&mut workbench, &theme));

    let strip = title.strip(TabStripKind::Normal);
    assert!(strip.is_disposed());
    assert!(!strip.is_layout_pending());
    assert_eq!(strip.layout_passes(), 0);
    assert!(strip.is_empty());
}

#[test]
fn test_rapid_closes_do_not_scroll_the_strip() {
    init_tracing();
    let theme = Theme::default_dark();
    let (_docs, refs) = files(9);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = laid_out(&refs, &mut workbench, &theme);

    // The user scrolls back to the first tab
    title.handle_input(
        TabStripKind::Normal,
        TabInput::Scroll(ScrollDelta::new(-2000.0, 0.0)),
        &mut ctx(&mut workbench, &theme),
    );
    assert_eq!(title.strip(TabStripKind::Normal).scrollbar().scroll_left(), 0.0);

    // ...and closes three tabs in a row through their close buttons
    for _ in 0..3 {
        let first = title.strip(TabStripKind::Normal).documents()[0].clone();
        assert!(title.handle_input(
            TabStripKind::Normal,
            TabInput::CloseButton { index: 0 },
            &mut ctx(&mut workbench, &theme),
        ));
        title.close_document(&first, &mut ctx(&mut workbench, &theme));
    }
    assert!(title.strip(TabStripKind::Normal).is_reveal_blocked());

    title.animation_frame(&ctx(&mut workbench, &theme));

    let strip = title.strip(TabStripKind::Normal);
    assert_eq!(strip.len(), 6);
    assert_eq!(strip.layout_passes(), 2);
    assert_eq!(strip.scrollbar().scroll_left(), 0.0);
    assert!(!strip.is_reveal_blocked());

    // The block is one-shot: the next pass reveals again
    title.set_active(true, &mut ctx(&mut workbench, &theme));
    title.animation_frame(&ctx(&mut workbench, &theme));
    assert_eq!(
        title.strip(TabStripKind::Normal).scrollbar().scroll_left(),
        6.0 * 118.0 - 300.0
    );
}

#[test]
fn test_hard_pin_toggle_moves_tab_and_keeps_scroll() {
    let theme = Theme::default_dark();
    let (docs, refs) = files(9);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = laid_out(&refs, &mut workbench, &theme);

    title.handle_input(
        TabStripKind::Normal,
        TabInput::Scroll(ScrollDelta::new(0.0, -462.0)),
        &mut ctx(&mut workbench, &theme),
    );
    assert_eq!(title.strip(TabStripKind::Normal).scrollbar().scroll_left(), 300.0);

    docs[2].hard_pinned.set(true);
    title.hard_pin_document(&refs[2], &mut ctx(&mut workbench, &theme));

    let hard = title.strip(TabStripKind::HardPinned);
    assert_eq!(hard.len(), 1);
    assert_eq!(hard.tabs()[0].name, "file3.rs");
    assert!(hard.tabs()[0].state.contains(TabState::HARD_PINNED));

    let normal = title.strip(TabStripKind::Normal);
    assert_eq!(normal.len(), 8);
    assert!(normal.documents().iter().all(|d| d.id() != refs[2].id()));
    assert_eq!(normal.scrollbar().scroll_left(), 300.0);

    // And back again
    docs[2].hard_pinned.set(false);
    title.hard_pin_document(&refs[2], &mut ctx(&mut workbench, &theme));
    assert!(title.strip(TabStripKind::HardPinned).is_empty());
    assert_eq!(title.strip(TabStripKind::Normal).tabs()[2].name, "file3.rs");
}

#[test]
fn test_move_document_reorders_tabs() {
    let theme = Theme::default_dark();
    let (_docs, refs) = files(3);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[2], &mut ctx(&mut workbench, &theme));

    let moved = workbench.group_mut(GROUP).documents.remove(0);
    workbench.group_mut(GROUP).documents.push(moved);
    title.move_document(&refs[0], 0, 2, &mut ctx(&mut workbench, &theme));

    let names: Vec<&str> = title
        .strip(TabStripKind::Normal)
        .tabs()
        .iter()
        .map(|tab| tab.name.as_str())
        .collect();
    assert_eq!(names, ["file2.rs", "file3.rs", "file1.rs"]);
    assert_eq!(title.strip(TabStripKind::Normal).tabs()[2].offset_left, 236.0);
}

#[test]
fn test_pinning_removes_italics() {
    let theme = Theme::default_dark();
    let (_docs, refs) = files(2);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[1], &mut ctx(&mut workbench, &theme));
    assert!(title.strip(TabStripKind::Normal).tabs()[0].italic);

    assert!(title.handle_input(
        TabStripKind::Normal,
        TabInput::DoubleClick { index: 0 },
        &mut ctx(&mut workbench, &theme),
    ));
    assert_eq!(workbench.calls, [Call::Pin(GROUP, refs[0].id())]);

    title.pin_document(&refs[0], &mut ctx(&mut workbench, &theme));
    let tab = &title.strip(TabStripKind::Normal).tabs()[0];
    assert!(!tab.italic);
    assert!(tab.state.contains(TabState::PINNED));
}

#[test]
fn test_active_and_dirty_colours() {
    let red = Color::rgb8(0xff, 0, 0);
    let blue = Color::rgb8(0, 0, 0xff);
    let yellow = Color::rgb8(0xff, 0xff, 0);
    let top = Color::rgb8(0, 0xff, 0);
    let theme = Theme::empty()
        .with(ColorToken::TabActiveBackground, red)
        .with(ColorToken::TabUnfocusedActiveBackground, blue)
        .with(ColorToken::TabActiveBorderTop, top)
        .with(ColorToken::TabActiveModifiedBorder, yellow);

    let (docs, refs) = files(2);
    let mut workbench = FakeWorkbench::with_group(&refs);
    workbench.options.highlight_modified_tabs = true;
    let mut title = coordinator();
    title.open_document(&refs[1], &mut ctx(&mut workbench, &theme));

    let active = &title.strip(TabStripKind::Normal).tabs()[1];
    assert_eq!(active.style.background, Some(red));
    assert_eq!(active.style.border_top, Some(top));

    docs[1].dirty.set(true);
    title.update_dirty(&refs[1], &mut ctx(&mut workbench, &theme));
    let active = &title.strip(TabStripKind::Normal).tabs()[1];
    assert!(active.is_dirty());
    assert_eq!(active.style.dirty_border_top, Some(yellow));
    assert_eq!(active.style.border_top, None);

    workbench.active_group = None;
    title.set_active(false, &mut ctx(&mut workbench, &theme));
    let active = &title.strip(TabStripKind::Normal).tabs()[1];
    assert_eq!(active.style.background, Some(blue));
    // No unfocused modified token in this theme
    assert_eq!(active.style.dirty_border_top, None);
}

#[test]
fn test_hover_uses_hover_background() {
    let hover = Color::rgb8(0x30, 0x30, 0x30);
    let theme = Theme::empty().with(ColorToken::TabHoverBackground, hover);
    let (_docs, refs) = files(2);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[1], &mut ctx(&mut workbench, &theme));

    title.handle_input(
        TabStripKind::Normal,
        TabInput::HoverEnter { index: 0 },
        &mut ctx(&mut workbench, &theme),
    );
    let tab = &title.strip(TabStripKind::Normal).tabs()[0];
    assert!(tab.state.contains(TabState::HOVER));
    assert_eq!(tab.style.background, Some(hover));

    title.handle_input(
        TabStripKind::Normal,
        TabInput::HoverLeave { index: 0 },
        &mut ctx(&mut workbench, &theme),
    );
    assert_eq!(title.strip(TabStripKind::Normal).tabs()[0].style.background, None);
}

#[test]
fn test_mouse_and_keyboard_requests() {
    let theme = Theme::default_dark();
    let (_docs, refs) = files(3);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[2], &mut ctx(&mut workbench, &theme));

    let primary = MouseEvent::new(MouseEventKind::Down, MouseButton::Primary);
    assert!(!title.handle_input(
        TabStripKind::Normal,
        TabInput::MouseDown {
            index: 0,
            event: primary.clone(),
            on_action_bar: true,
        },
        &mut ctx(&mut workbench, &theme),
    ));
    assert!(title.handle_input(
        TabStripKind::Normal,
        TabInput::MouseDown {
            index: 0,
            event: primary,
            on_action_bar: false,
        },
        &mut ctx(&mut workbench, &theme),
    ));
    assert!(title.handle_input(
        TabStripKind::Normal,
        TabInput::KeyUp {
            index: 0,
            event: KeyEvent::plain(Key::Right),
        },
        &mut ctx(&mut workbench, &theme),
    ));
    assert!(title.handle_input(
        TabStripKind::Normal,
        TabInput::KeyUp {
            index: 1,
            event: KeyEvent::plain(Key::End),
        },
        &mut ctx(&mut workbench, &theme),
    ));

    let middle = MouseEvent::new(MouseEventKind::Up, MouseButton::Middle);
    assert!(title.handle_input(
        TabStripKind::Normal,
        TabInput::MouseUp { index: 1, event: middle },
        &mut ctx(&mut workbench, &theme),
    ));
    assert!(title.strip(TabStripKind::Normal).is_reveal_blocked());

    let navigate = OpenOptions {
        preserve_focus: true,
        ..OpenOptions::default()
    };
    assert_eq!(
        workbench.calls,
        [
            Call::Open(GROUP, refs[0].id(), OpenOptions::default()),
            Call::Open(GROUP, refs[1].id(), navigate),
            Call::Open(GROUP, refs[2].id(), navigate),
            Call::Close(GROUP, refs[1].id()),
        ]
    );
}

#[test]
fn test_double_click_on_empty_space_opens_untitled_at_end() {
    let theme = Theme::default_dark();
    let (_docs, refs) = files(3);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    title.open_document(&refs[2], &mut ctx(&mut workbench, &theme));

    assert!(!title.handle_input(
        TabStripKind::Normal,
        TabInput::ContainerDoubleClick { over_empty_space: false },
        &mut ctx(&mut workbench, &theme),
    ));
    assert!(title.handle_input(
        TabStripKind::Normal,
        TabInput::ContainerDoubleClick { over_empty_space: true },
        &mut ctx(&mut workbench, &theme),
    ));
    assert_eq!(
        workbench.calls,
        [Call::OpenUntitled(
            GROUP,
            OpenOptions {
                index: Some(3),
                pinned: true,
                preserve_focus: false,
            }
        )]
    );
}

// =============================================================================
// Header chrome
// =============================================================================

#[derive(Default)]
struct ChromeLog {
    breadcrumbs_hidden: Cell<bool>,
    breadcrumbs_toggle_on_update: Cell<bool>,
    breadcrumbs_layout: RefCell<Option<Dimension>>,
    toolbar_updates: Cell<usize>,
}

struct FakeBreadcrumbs(Rc<ChromeLog>);

impl BreadcrumbsControl for FakeBreadcrumbs {
    fn update(&mut self) -> bool {
        if self.0.breadcrumbs_toggle_on_update.get() {
            self.0.breadcrumbs_hidden.set(!self.0.breadcrumbs_hidden.get());
            return true;
        }
        false
    }

    fn is_hidden(&self) -> bool {
        self.0.breadcrumbs_hidden.get()
    }

    fn layout(&mut self, dimension: Dimension) {
        *self.0.breadcrumbs_layout.borrow_mut() = Some(dimension);
    }
}

struct FakeToolbar(Rc<ChromeLog>);

impl EditorActionsToolbar for FakeToolbar {
    fn update(&mut self, _group_active: bool, _active_document: Option<&DocumentRef>) {
        self.0.toolbar_updates.set(self.0.toolbar_updates.get() + 1);
    }

    fn width(&self) -> f32 {
        50.0
    }
}

fn with_chrome(log: &Rc<ChromeLog>) -> TitleCoordinator {
    coordinator()
        .with_breadcrumbs(Box::new(FakeBreadcrumbs(Rc::clone(log))))
        .with_toolbar(Box::new(FakeToolbar(Rc::clone(log))))
}

#[test]
fn test_layout_splits_width_between_strips_and_toolbar() {
    let theme = Theme::default_dark();
    let (docs, refs) = files(4);
    docs[0].hard_pinned.set(true);
    docs[1].hard_pinned.set(true);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let log = Rc::new(ChromeLog::default());
    let mut title = with_chrome(&log);
    for document in &refs {
        title.open_document(document, &mut ctx(&mut workbench, &theme));
    }

    title.layout(Some(Dimension::new(600.0, 57.0)), &ctx(&mut workbench, &theme));

    assert_eq!(*log.breadcrumbs_layout.borrow(), Some(Dimension::new(600.0, 22.0)));
    assert_eq!(
        title.strip(TabStripKind::HardPinned).dimension(),
        Some(Dimension::new(236.0, 35.0))
    );
    assert_eq!(
        title.strip(TabStripKind::Normal).dimension(),
        Some(Dimension::new(600.0 - 236.0 - 50.0, 35.0))
    );
}

#[test]
fn test_hidden_breadcrumbs_leave_full_height() {
    let theme = Theme::default_dark();
    let (_docs, refs) = files(1);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let log = Rc::new(ChromeLog::default());
    log.breadcrumbs_hidden.set(true);
    let mut title = with_chrome(&log);
    title.open_document(&refs[0], &mut ctx(&mut workbench, &theme));

    title.layout(Some(Dimension::new(400.0, 35.0)), &ctx(&mut workbench, &theme));
    assert_eq!(*log.breadcrumbs_layout.borrow(), None);
    assert_eq!(
        title.strip(TabStripKind::Normal).dimension(),
        Some(Dimension::new(350.0, 35.0))
    );
}

#[test]
fn test_breadcrumbs_visibility_change_relayouts_group() {
    let theme = Theme::default_dark();
    let (_docs, refs) = files(2);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let log = Rc::new(ChromeLog::default());
    let mut title = with_chrome(&log);

    title.open_document(&refs[1], &mut ctx(&mut workbench, &theme));
    assert!(workbench.calls.is_empty());
    assert_eq!(log.toolbar_updates.get(), 1);

    log.breadcrumbs_toggle_on_update.set(true);
    workbench.remove(GROUP, refs[0].id());
    title.close_document(&refs[0], &mut ctx(&mut workbench, &theme));
    assert_eq!(workbench.calls, [Call::Relayout(GROUP)]);
    assert_eq!(log.toolbar_updates.get(), 2);

    title.handle_breadcrumbs_enablement_change(&mut ctx(&mut workbench, &theme));
    assert_eq!(workbench.calls, [Call::Relayout(GROUP), Call::Relayout(GROUP)]);
}

#[test]
fn test_active_hard_pinned_document_skips_toolbar_layout() {
    let theme = Theme::default_dark();
    let (docs, refs) = files(3);
    docs[0].hard_pinned.set(true);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let log = Rc::new(ChromeLog::default());
    let mut title = with_chrome(&log);
    for document in &refs {
        title.open_document(document, &mut ctx(&mut workbench, &theme));
    }
    title.layout(Some(Dimension::new(600.0, 57.0)), &ctx(&mut workbench, &theme));
    title.animation_frame(&ctx(&mut workbench, &theme));
    assert_eq!(title.strip(TabStripKind::Normal).layout_passes(), 1);

    workbench.activate(GROUP, refs[0].id());
    title.set_active(true, &mut ctx(&mut workbench, &theme));

    assert!(!title.strip(TabStripKind::Normal).is_layout_pending());
    assert!(!title.strip(TabStripKind::HardPinned).is_layout_pending());
    assert!(title.strip(TabStripKind::HardPinned).tabs()[0].is_active());
}

#[test]
fn test_reveal_block_waits_while_hard_pinned_document_is_active() {
    let theme = Theme::default_dark();
    let (docs, refs) = files(4);
    docs[0].hard_pinned.set(true);
    let mut workbench = FakeWorkbench::with_group(&refs);
    let mut title = coordinator();
    for document in &refs {
        title.open_document(document, &mut ctx(&mut workbench, &theme));
    }
    title.layout(Some(Dimension::new(300.0, 35.0)), &ctx(&mut workbench, &theme));
    title.animation_frame(&ctx(&mut workbench, &theme));
    let scroll_left = title.strip(TabStripKind::Normal).scrollbar().scroll_left();

    assert!(title.handle_input(
        TabStripKind::Normal,
        TabInput::CloseButton { index: 0 },
        &mut ctx(&mut workbench, &theme),
    ));
    assert!(title.strip(TabStripKind::Normal).is_reveal_blocked());

    workbench.activate(GROUP, refs[0].id());
    title.set_active(true, &mut ctx(&mut workbench, &theme));
    title.animation_frame(&ctx(&mut workbench, &theme));
    assert!(title.strip(TabStripKind::Normal).is_reveal_blocked());
    assert!(!title.strip(TabStripKind::Normal).is_layout_pending());

    // The next pass on the normal strip consumes the block without scrolling
    workbench.activate(GROUP, refs[3].id());
    title.set_active(true, &mut ctx(&mut workbench, &theme));
    title.animation_frame(&ctx(&mut workbench, &theme));
    let normal = title.strip(TabStripKind::Normal);
    assert!(!normal.is_reveal_blocked());
    assert_eq!(normal.scrollbar().scroll_left(), scroll_left);
}
