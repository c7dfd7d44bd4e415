use crate::domain::filter::filter_estates;
use crate::domain::geo::{BoundsEvent, ViewportBounds};
use crate::estates::{Estate, EstateSource, FetchError, Info, ResponseEnvelope};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread::JoinHandle;

pub type SharedView = Arc<RwLock<EstateView>>;

/// Loaded listings plus the loading/error flags the page renders from.
#[derive(Debug)]
pub struct EstateView {
    loading: bool,
    show_error: bool,
    error_message: String,
    estates: Vec<Estate>,
    info: Option<Info>,
}

impl Default for EstateView {
    fn default() -> Self {
        Self::new()
    }
}

impl EstateView {
    /// A freshly mounted view is loading until its fetch completes.
    pub fn new() -> Self {
        Self {
            loading: true,
            show_error: false,
            error_message: String::new(),
            estates: Vec::new(),
            info: None,
        }
    }

    /// Mounts a view and starts its one fetch on a background thread.
    pub fn mount(source: Arc<dyn EstateSource>) -> (SharedView, JoinHandle<()>) {
        let view: SharedView = Arc::new(RwLock::new(EstateView::new()));
        let handle = Arc::clone(&view);

        let join = std::thread::spawn(move || fetch_estates(&handle, source.as_ref()));

        (view, join)
    }

    /// Applies a finished fetch. Clears `loading` whichever way it went.
    pub fn complete(&mut self, result: Result<ResponseEnvelope, FetchError>) {
        match result {
            Ok(envelope) => self.on_loaded(envelope),
            Err(e) => self.on_failed(&e),
        }
        self.loading = false;
    }

    fn on_loaded(&mut self, envelope: ResponseEnvelope) {
        match envelope.estates {
            Some(raw) => {
                self.estates = raw.into_iter().map(Estate::from_raw).collect();
                log::info!("Loaded {} estates", self.estates.len());
            }
            None => log::warn!("Response has no estates; keeping current collection"),
        }
        // Replaced even when `estates` was missing.
        self.info = envelope.info;
    }

    fn on_failed(&mut self, e: &FetchError) {
        log::error!("Estate fetch failed: {e}");
        self.show_error = true;
        self.error_message = format!("Error while loading estates: {e}.");
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.show_error.then_some(self.error_message.as_str())
    }

    pub fn estates(&self) -> &[Estate] {
        &self.estates
    }

    pub fn info(&self) -> Option<&Info> {
        self.info.as_ref()
    }

    /// Recomputed on every call; never cached.
    pub fn filtered_estates(&self, state: &ViewState) -> Vec<&Estate> {
        filter_estates(&self.estates, state.bounds.as_ref(), &state.search)
    }
}

/// Issues the GET and applies the outcome. The write lock is taken only
/// after the request has finished.
pub fn fetch_estates(view: &SharedView, source: &dyn EstateSource) {
    log::info!("Fetching estates");
    let result = source.fetch();
    write(view).complete(result);
}

pub fn read(view: &SharedView) -> RwLockReadGuard<'_, EstateView> {
    view.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(view: &SharedView) -> RwLockWriteGuard<'_, EstateView> {
    view.write().unwrap_or_else(PoisonError::into_inner)
}

/// What the user is currently looking at: viewport and search text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub bounds: Option<ViewportBounds>,
    pub search: String,
}

impl ViewState {
    /// Replaces the bounds from a pan/zoom event. Ignored when the event has
    /// no south-west corner.
    pub fn bounds_updated(&mut self, event: &BoundsEvent) {
        if event.south_west.is_none() {
            return;
        }
        if let Some(bounds) = event.to_bounds() {
            self.bounds = Some(bounds);
        }
    }
}
