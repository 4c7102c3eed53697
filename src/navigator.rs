//! Hierarchical focus navigation.
//!
//! The [`Navigator`] owns the root of a widget tree and keeps a stack of
//! child indices describing which nested containers the user has entered.
//! `next`/`prev`/`focus` move the selection inside the top container,
//! `enter` activates the selected child (descending into it when it is a
//! container) and `back` first leaves edit mode, then pops one level.
//!
//! Every operation that changes state notifies the registered observers
//! with exactly one [`NavigatorEvent`] carrying the root-to-focus [`Path`].

use alloc::boxed::Box;
use alloc::vec::Vec;

use log::{debug, warn};

use crate::ui::core::{Command, Navigable, Widget, is_selectable};

/// Maximum number of levels (root included) the navigator descends into
pub const MAX_DEPTH: usize = 8;

const MAX_STACK: usize = MAX_DEPTH - 1;

/// One widget on a path, with its position inside its parent.
///
/// The root has no parent and carries `None`.
#[derive(Clone, Copy)]
pub struct PathSegment<'a> {
    pub widget: &'a dyn Widget,
    pub index: Option<usize>,
}

/// Chain of widgets from the root downwards
#[derive(Clone, Default)]
pub struct Path<'a> {
    segments: Vec<PathSegment<'a>>,
}

impl<'a> Path<'a> {
    /// Widget referenced by the last segment
    pub fn current(&self) -> Option<&'a dyn Widget> {
        self.segments.last().map(|s| s.widget)
    }

    pub fn segments(&self) -> &[PathSegment<'a>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn push(&mut self, widget: &'a dyn Widget, index: Option<usize>) {
        self.segments.push(PathSegment { widget, index });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorEventKind {
    FocusChanged,
    Activated,
    Deactivated,
}

/// Navigation change delivered to observers
pub struct NavigatorEvent<'a> {
    pub kind: NavigatorEventKind,
    /// Root-to-focus path after the change
    pub path: Path<'a>,
}

pub trait NavigatorObserver {
    fn on_event(&mut self, event: &NavigatorEvent<'_>);
}

impl<F: FnMut(&NavigatorEvent<'_>)> NavigatorObserver for F {
    fn on_event(&mut self, event: &NavigatorEvent<'_>) {
        self(event)
    }
}

/// Focus state machine over a tree of navigable containers.
///
/// # Examples
/// ```ignore
/// let mut nav = Navigator::new(menu);
/// nav.add_observer(|e: &NavigatorEvent<'_>| info!("{:?}", e.kind));
///
/// nav.next();
/// nav.enter();
/// nav.back();
/// ```
pub struct Navigator<R: Navigable> {
    root: R,
    /// Child index entered at each level below the root
    stack: heapless::Vec<usize, MAX_STACK>,
    /// A leaf was activated by `enter` and receives dispatched commands
    editing: bool,
    observers: Vec<Box<dyn NavigatorObserver>>,
}

impl<R: Navigable> Navigator<R> {
    pub fn new(root: R) -> Self {
        Self {
            root,
            stack: heapless::Vec::new(),
            editing: false,
            observers: Vec::new(),
        }
    }

    pub fn add_observer<O: NavigatorObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut R {
        &mut self.root
    }

    /// Number of container levels entered, the root counting as one
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// Whether a leaf entered through [`enter`](Self::enter) is being edited
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// The focused widget, or the top container when nothing has focus
    pub fn current(&self) -> Option<&dyn Widget> {
        let top = self.top()?;
        match top.item() {
            Some(item) => Some(item),
            None => Some(top as &dyn Widget),
        }
    }

    pub fn current_mut(&mut self) -> Option<&mut dyn Widget> {
        let top = self.top_mut()?;
        match top.index() {
            Some(i) if i < top.child_count() => top.child_mut(i),
            _ => Some(top as &mut dyn Widget),
        }
    }

    /// Root-to-focus path: the root, every entered container and the
    /// focused item of the top container.
    pub fn path(&self) -> Path<'_> {
        build_path(&self.root, &self.stack)
    }

    /// Visit every widget depth-first, parents before children.
    ///
    /// The visitor sees the path to each widget; returning false stops the
    /// traversal.
    pub fn walk<F>(&self, mut visitor: F)
    where
        F: FnMut(&Path<'_>) -> bool,
    {
        let mut path = Path::default();
        path.push(&self.root, None);
        if !visitor(&path) {
            return;
        }
        walk_children(&self.root, &mut path, &mut visitor);
    }

    /// Focus the next selectable child of the top container.
    pub fn next(&mut self) -> bool {
        let Some(top) = self.top() else {
            return false;
        };
        let start = top.index().map_or(0, |i| i + 1);
        match find_forward(top, start) {
            Some(target) => self.focus_exact(target),
            None => false,
        }
    }

    /// Focus the previous selectable child; from no selection this starts
    /// at the last child.
    pub fn prev(&mut self) -> bool {
        let Some(top) = self.top() else {
            return false;
        };
        let start = match top.index() {
            Some(i) => i.checked_sub(1),
            None => top.child_count().checked_sub(1),
        };
        match start.and_then(|s| find_backward(top, s)) {
            Some(target) => self.focus_exact(target),
            None => false,
        }
    }

    /// Focus the first selectable child at or after `index`, or clear the
    /// focus for `None`.
    pub fn focus(&mut self, index: Option<usize>) -> bool {
        let Some(top) = self.top() else {
            return false;
        };
        let Some(index) = index else {
            if top.index().is_some() {
                if let Some(top) = self.top_mut() {
                    top.set_index(None);
                }
                self.editing = false;
                self.emit(NavigatorEventKind::FocusChanged);
            }
            return true;
        };
        match find_forward(top, index) {
            Some(target) => self.focus_exact(target),
            None => false,
        }
    }

    /// Activate the selected child of the top container.
    ///
    /// Without a valid selection the first selectable child is focused
    /// first. A navigable child is pushed and gets its own first selectable
    /// child selected and activated; a leaf is put into edit mode.
    pub fn enter(&mut self) -> bool {
        let full = self.stack.is_full();
        let Some(top) = self.top_mut() else {
            return false;
        };

        let index = match top.index() {
            Some(i) if top.child(i).is_some_and(is_selectable) => i,
            _ => match find_forward(top, 0) {
                Some(i) => i,
                None => return false,
            },
        };
        let navigable = top
            .child(index)
            .is_some_and(|c| c.as_navigable().is_some());
        if navigable && full {
            warn!("Navigator refused to enter beyond depth {}", MAX_DEPTH);
            return false;
        }

        top.set_active(Some(index));
        if !navigable {
            debug!("Navigator activated item {}", index);
            self.editing = true;
            self.emit(NavigatorEventKind::Activated);
            return true;
        }

        if let Some(child) = top.child_mut(index).and_then(|c| c.as_navigable_mut()) {
            if child.index().is_none()
                && let Some(first) = find_forward(child, 0)
            {
                child.set_index(Some(first));
            }
            if let Some(i) = child.index() {
                child.set_active(Some(i));
            }
        }
        // Capacity was checked above
        self.stack.push(index).ok();
        self.editing = false;
        debug!("Navigator entered level {} at {}", self.depth(), index);
        self.emit(NavigatorEventKind::FocusChanged);
        true
    }

    /// Leave edit mode, or pop one level when the top is not active.
    ///
    /// At the root with nothing active this drops the focus; with nothing
    /// focused either it is a no-op.
    pub fn back(&mut self) -> bool {
        let at_root = self.stack.is_empty();
        let Some(top) = self.top_mut() else {
            return false;
        };

        if top.is_active() {
            top.deactivate();
            self.editing = false;
            debug!("Navigator left edit mode at depth {}", self.depth());
            self.emit(NavigatorEventKind::Deactivated);
            return true;
        }

        if at_root {
            if top.index().is_some() {
                top.set_index(None);
                self.emit(NavigatorEventKind::FocusChanged);
            }
            return true;
        }

        self.stack.pop();
        if let Some(parent) = self.top_mut() {
            parent.deactivate();
        }
        self.editing = false;
        debug!("Navigator returned to depth {}", self.depth());
        self.emit(NavigatorEventKind::FocusChanged);
        true
    }

    /// Route a command from the control loop.
    ///
    /// While a leaf is being edited it receives every command, and `Enter`,
    /// `Esc` and `Back` then also leave edit mode. Otherwise `Next`/`Up`
    /// focus the following child and `Prev`/`Down` the preceding one, the
    /// same direction a selector steps in, `Enter` and `Esc`/`Back` drive
    /// the navigator and anything else goes to the focused widget.
    pub fn dispatch(&mut self, cmd: Command) -> bool {
        if self.editing && !self.top().is_some_and(|top| top.is_active()) {
            self.editing = false;
        }

        if self.editing {
            let handled = self.top_mut().is_some_and(|top| top.interact(cmd));
            return match cmd {
                Command::Enter | Command::Esc | Command::Back => self.back(),
                _ => handled,
            };
        }

        match cmd {
            Command::Next | Command::Up => self.next(),
            Command::Prev | Command::Down => self.prev(),
            Command::Enter => self.enter(),
            Command::Esc | Command::Back => self.back(),
            Command::Idle => self.top_mut().is_some_and(|top| top.interact(cmd)),
            _ => self.current_mut().is_some_and(|w| w.interact(cmd)),
        }
    }

    fn focus_exact(&mut self, index: usize) -> bool {
        let Some(top) = self.top_mut() else {
            return false;
        };
        let prev = top.index();
        top.set_index(Some(index));
        let now = top.index();
        if now != prev {
            debug!("Navigator focus {:?} -> {:?}", prev, now);
            self.emit(NavigatorEventKind::FocusChanged);
        }
        now == Some(index)
    }

    fn top(&self) -> Option<&dyn Navigable> {
        descend(&self.root, &self.stack)
    }

    fn top_mut(&mut self) -> Option<&mut dyn Navigable> {
        descend_mut(&mut self.root, &self.stack)
    }

    fn emit(&mut self, kind: NavigatorEventKind) {
        if self.observers.is_empty() {
            return;
        }
        let event = NavigatorEvent {
            kind,
            path: build_path(&self.root, &self.stack),
        };
        for observer in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }
}

fn descend<'a>(node: &'a dyn Navigable, stack: &[usize]) -> Option<&'a dyn Navigable> {
    match stack.split_first() {
        None => Some(node),
        Some((&i, rest)) => descend(node.child(i)?.as_navigable()?, rest),
    }
}

fn descend_mut<'a>(node: &'a mut dyn Navigable, stack: &[usize]) -> Option<&'a mut dyn Navigable> {
    match stack.split_first() {
        None => Some(node),
        Some((&i, rest)) => descend_mut(node.child_mut(i)?.as_navigable_mut()?, rest),
    }
}

fn build_path<'a>(root: &'a dyn Navigable, stack: &[usize]) -> Path<'a> {
    let mut path = Path::default();
    path.push(root as &dyn Widget, None);

    let mut node = root;
    for &i in stack {
        let Some(next) = node.child(i).and_then(|c| c.as_navigable()) else {
            return path;
        };
        path.push(next as &dyn Widget, Some(i));
        node = next;
    }
    if let Some(i) = node.index()
        && let Some(item) = node.child(i)
    {
        path.push(item, Some(i));
    }
    path
}

fn walk_children<'a, F>(node: &'a dyn Navigable, path: &mut Path<'a>, visitor: &mut F) -> bool
where
    F: FnMut(&Path<'_>) -> bool,
{
    for i in 0..node.child_count() {
        let Some(child) = node.child(i) else {
            continue;
        };
        path.push(child, Some(i));
        let mut keep = visitor(&*path);
        if keep && let Some(nested) = child.as_navigable() {
            keep = walk_children(nested, path, visitor);
        }
        path.segments.pop();
        if !keep {
            return false;
        }
    }
    true
}

fn find_forward(node: &dyn Navigable, start: usize) -> Option<usize> {
    (start..node.child_count()).find(|&i| node.child(i).is_some_and(is_selectable))
}

fn find_backward(node: &dyn Navigable, start: usize) -> Option<usize> {
    let last = node.child_count().checked_sub(1)?;
    (0..=start.min(last))
        .rev()
        .find(|&i| node.child(i).is_some_and(is_selectable))
}
