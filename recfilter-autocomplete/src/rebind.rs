//! Attachment re-binder
//!
//! Model of the client behavior served at `/js/recording_filter.js`. When a
//! fragment is inserted after page load, every song name input that has not
//! been initialized yet is flagged and handed to the host framework's
//! behavior attachment. The flag makes attachment happen at most once per
//! element.
//!
//! The host framework (DOM lookup, per-element data flags, attachment) is
//! injected through [`BehaviorHost`].

/// Id prefix of the containers that hold song name inputs
pub const SONG_NAME_WRAPPER_PREFIX: &str = "song-name-wrapper-";

/// What the attach pass was invoked on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachContext {
    /// Initial page load; the framework's top-level pass covers it
    Document,
    /// Content inserted after page load
    Fragment,
}

/// Capabilities supplied by the host UI framework
pub trait BehaviorHost {
    type Element;

    /// Every input on the page, paired with its enclosing container's id
    fn inputs(&self) -> Vec<(String, Self::Element)>;

    fn is_initialized(&self, element: &Self::Element) -> bool;

    fn mark_initialized(&mut self, element: &Self::Element);

    /// Run the framework's per-element behavior attachment
    fn attach(&mut self, element: &Self::Element);
}

/// True when a container id qualifies its inputs for autocomplete
pub fn is_song_name_wrapper(container_id: &str) -> bool {
    container_id.starts_with(SONG_NAME_WRAPPER_PREFIX)
}

/// Attach behaviors to song name inputs not yet initialized
///
/// Returns the number of elements attached by this call.
pub fn rebind<H: BehaviorHost>(context: AttachContext, host: &mut H) -> usize {
    if context == AttachContext::Document {
        return 0;
    }

    let mut attached = 0;
    let candidates = host
        .inputs()
        .into_iter()
        .filter(|(container_id, _)| is_song_name_wrapper(container_id))
        .map(|(_, element)| element);

    for element in candidates {
        if host.is_initialized(&element) {
            continue;
        }
        host.mark_initialized(&element);
        host.attach(&element);
        attached += 1;
    }
    attached
}
