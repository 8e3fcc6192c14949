//! Shared fixtures: a small document mirrored into a `PresentationSnapshot`.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use css_fragmentation::{PresentationSnapshot, TreeUpdate};
use css_style_model::{ComputedStyle, Display, LayoutRect, NodeKey, Overflow};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn styled(display: Display, overflow: Overflow) -> ComputedStyle {
    ComputedStyle {
        display,
        overflow,
        ..ComputedStyle::default()
    }
}

pub fn block() -> ComputedStyle {
    styled(Display::Block, Overflow::Visible)
}

pub fn inline() -> ComputedStyle {
    styled(Display::Inline, Overflow::Visible)
}

pub struct Fixture {
    pub snapshot: PresentationSnapshot,
    next_key: u64,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            snapshot: PresentationSnapshot::new(),
            next_key: 1,
        }
    }

    fn mint(&mut self) -> NodeKey {
        let key = NodeKey(self.next_key);
        self.next_key += 1;
        key
    }

    /// `<body>` spanning an 800x600 viewport.
    pub fn body(&mut self) -> NodeKey {
        self.element(
            NodeKey::ROOT,
            "body",
            block(),
            Some(LayoutRect::from_px(0.0, 0.0, 800.0, 600.0)),
        )
    }

    /// Append an element as the last child of `parent`.
    pub fn element(
        &mut self,
        parent: NodeKey,
        tag: &str,
        style: ComputedStyle,
        rect: Option<LayoutRect>,
    ) -> NodeKey {
        let node = self.mint();
        self.snapshot
            .apply_update(TreeUpdate::InsertElement {
                parent,
                node,
                tag: tag.into(),
                pos: usize::MAX,
            })
            .unwrap();
        self.snapshot.set_style(node, style);
        if let Some(rect) = rect {
            self.snapshot.set_rect(node, rect);
        }
        node
    }

    /// Append a text node as the last child of `parent`.
    pub fn text(&mut self, parent: NodeKey, text: &str, rect: Option<LayoutRect>) -> NodeKey {
        let node = self.mint();
        self.snapshot
            .apply_update(TreeUpdate::InsertText {
                parent,
                node,
                text: text.into(),
                pos: usize::MAX,
            })
            .unwrap();
        if let Some(rect) = rect {
            self.snapshot.set_rect(node, rect);
        }
        node
    }
}
