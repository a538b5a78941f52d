// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-thread tracing state: thread id, stack top and sink slot.

use super::frame::Frame;
use crate::console_sink::ConsoleSink;
use crate::location::Location;
use crate::sink::Sink;
use std::cell::{Cell, OnceCell, RefCell};
use std::fmt::Display;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

pub(crate) static THREAD_ID: AtomicU64 = AtomicU64::new(0);

static DEFAULT_SINK: OnceLock<Arc<dyn Sink>> = OnceLock::new();

/// Identifier of a traced thread, as printed in `Thread(<id>)`.
///
/// Ids are small integers handed out in the order threads first touch framewise, and are
/// never reused within a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThreadID(pub(crate) u64);

impl ThreadID {
    /// The id of the calling thread.
    ///
    /// A thread whose thread-local storage has already been torn down gets a fresh id.
    pub fn current() -> ThreadID {
        with_context(|ctx| ctx.id)
            .unwrap_or_else(|| ThreadID(THREAD_ID.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl Display for ThreadID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(crate) struct ThreadContext {
    pub(crate) id: ThreadID,
    top: Cell<Option<NonNull<Frame>>>,
    sink: RefCell<Option<Arc<dyn Sink>>>,
}

thread_local! {
    static CONTEXT: OnceCell<ThreadContext> = const { OnceCell::new() };
}

/// Lazily initializes and returns the thread-local context.
fn get_or_init_context(once: &OnceCell<ThreadContext>) -> &ThreadContext {
    once.get_or_init(|| ThreadContext {
        id: ThreadID(THREAD_ID.fetch_add(1, Ordering::Relaxed)),
        top: Cell::new(None),
        sink: RefCell::new(None),
    })
}

/// Runs `f` against the calling thread's context.
///
/// Returns `None` once the thread's locals are being destroyed.
pub(crate) fn with_context<R>(f: impl FnOnce(&ThreadContext) -> R) -> Option<R> {
    CONTEXT.try_with(|once| f(get_or_init_context(once))).ok()
}

fn default_sink() -> Arc<dyn Sink> {
    DEFAULT_SINK
        .get_or_init(|| Arc::new(ConsoleSink::stdout()))
        .clone()
}

impl ThreadContext {
    pub(crate) fn top(&self) -> Option<NonNull<Frame>> {
        self.top.get()
    }

    pub(crate) fn sink(&self) -> Arc<dyn Sink> {
        self.sink.borrow().clone().unwrap_or_else(default_sink)
    }

    /// Links `frame` above the current top.
    ///
    /// # Safety
    ///
    /// `frame` must be pinned, owned by this thread, and not already linked.  Its `Drop` must
    /// call [Self::pop].
    pub(crate) unsafe fn push(&self, frame: NonNull<Frame>) {
        let entering = unsafe { frame.as_ref() };
        entering.caller.set(self.top.get());
        entering.linked.set(true);
        self.top.set(Some(frame));
    }

    /// Unlinks `frame`.  Returns `false` if it was not the top.
    ///
    /// Frames pinned on the stack are always the top when dropped.  A frame pinned elsewhere
    /// can be dropped early; it is spliced out so the frames above it link to its caller.
    ///
    /// # Safety
    ///
    /// `frame` must be a live frame previously passed to [Self::push] on this thread.
    pub(crate) unsafe fn pop(&self, frame: NonNull<Frame>) -> bool {
        let leaving = unsafe { frame.as_ref() };
        let caller = leaving.caller.replace(None);
        leaving.linked.set(false);
        if self.top.get() == Some(frame) {
            self.top.set(caller);
            return true;
        }
        let mut cursor = self.top.get();
        while let Some(ptr) = cursor {
            //safety: everything reachable from top is live, see `pop`
            let above = unsafe { ptr.as_ref() };
            if above.caller.get() == Some(frame) {
                above.caller.set(caller);
                break;
            }
            cursor = above.caller.get();
        }
        false
    }
}

/**
Walks caller links, yielding each frame's location.

Frames are only ever unlinked by their own `Drop`, so every frame reachable from a live frame is
itself live.  The walk must still finish before any frame on this thread is dropped, which is why
construction is `unsafe` and the chain is only used inside this crate to copy locations out.
*/
pub(crate) struct FrameChain {
    cursor: Option<NonNull<Frame>>,
}

impl FrameChain {
    /// # Safety
    ///
    /// `start` must be `None` or a live frame of the calling thread, and the chain must be
    /// consumed before any frame of this thread is dropped.
    pub(crate) unsafe fn new(start: Option<NonNull<Frame>>) -> Self {
        Self { cursor: start }
    }
}

impl Iterator for FrameChain {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let ptr = self.cursor?;
        //safety: upheld by FrameChain::new
        let frame = unsafe { ptr.as_ref() };
        self.cursor = frame.caller.get();
        Some(frame.location())
    }
}

/// Number of live frames on the calling thread.
pub fn depth() -> usize {
    with_context(|ctx| unsafe { FrameChain::new(ctx.top()) }.count()).unwrap_or(0)
}

/// Location of the innermost live frame on the calling thread, if any.
pub fn current_location() -> Option<Location> {
    with_context(|ctx| unsafe { FrameChain::new(ctx.top()) }.next()).flatten()
}

/// Replaces the calling thread's sink, returning the previous one.
///
/// Affects only logged output of the calling thread.  Other threads keep their sinks, and
/// unwind lines keep going to the [diagnostic sink](crate::diagnostic).
///
/// ```
/// use framewise::{InMemorySink, set_sink};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let previous = set_sink(sink.clone());
/// framewise::output!(answer = 42);
/// set_sink(previous);
/// assert!(sink.drain_logs().ends_with(" answer => 42"));
/// ```
pub fn set_sink(sink: Arc<dyn Sink>) -> Arc<dyn Sink> {
    with_context(move |ctx| ctx.sink.replace(Some(sink)))
        .flatten()
        .unwrap_or_else(default_sink)
}

/// Puts the calling thread back on the default sink (standard output).
pub fn reset_sink() {
    with_context(|ctx| ctx.sink.replace(None));
}

/// The sink the calling thread currently writes logged output to.
pub fn current_sink() -> Arc<dyn Sink> {
    with_context(|ctx| ctx.sink()).unwrap_or_else(default_sink)
}
