// src/application/state.rs
//
// Application state store
//
// - Owns the four operation slices (register, login, banners, venues)
// - Each trigger consumes a repository stream on the Tokio runtime
// - Each trigger stamps its slice with a new generation; emissions from an
//   older generation are dropped, so the latest trigger always wins
// - Dropping the store aborts every in-flight consumption. Work already
//   sent to the backend is not rolled back.

use futures::StreamExt;
use log::debug;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::application::slices::{
    BannersState, LoginScreenState, OperationSlice, RegisterScreenState, VenuesState,
};
use crate::domain::{validate_login, validate_registration, DomainResult, LoginForm, RegistrationForm};
use crate::error::{AppError, AppResult};
use crate::repositories::{ResultStream, WeddingRepository};
use crate::usecases::UseCases;

/// One observable slice plus the generation allowed to write it
struct Slice<S> {
    sender: watch::Sender<S>,
    generation: AtomicU64,
}

impl<S: Default + Clone> Slice<S> {
    fn new() -> Self {
        let (sender, _) = watch::channel(S::default());
        Self {
            sender,
            generation: AtomicU64::new(0),
        }
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Replace the slice if `generation` is still the latest trigger
    fn publish(&self, generation: u64, state: S) -> bool {
        self.sender.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *current = state;
            true
        })
    }

    fn current(&self) -> S {
        self.sender.borrow().clone()
    }
}

/// Decrements the in-flight counter when a consumption ends or is aborted
struct InFlightGuard(Arc<watch::Sender<usize>>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.send_modify(|count| *count = count.saturating_sub(1));
    }
}

/// Point-in-time copy of every slice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppSnapshot {
    pub register: RegisterScreenState,
    pub login: LoginScreenState,
    pub banners: BannersState,
    pub venues: VenuesState,
}

pub struct AppStore {
    use_cases: UseCases,
    register_state: Arc<Slice<RegisterScreenState>>,
    login_state: Arc<Slice<LoginScreenState>>,
    banners_state: Arc<Slice<BannersState>>,
    venues_state: Arc<Slice<VenuesState>>,
    runtime: Handle,
    tasks: Mutex<JoinSet<()>>,
    in_flight: Arc<watch::Sender<usize>>,
}

impl AppStore {
    /// Build the store and start loading banners and venues.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(use_cases: UseCases) -> AppResult<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| AppError::Other(format!("AppStore requires a Tokio runtime: {}", e)))?;
        let (in_flight, _) = watch::channel(0usize);

        let store = Self {
            use_cases,
            register_state: Arc::new(Slice::new()),
            login_state: Arc::new(Slice::new()),
            banners_state: Arc::new(Slice::new()),
            venues_state: Arc::new(Slice::new()),
            runtime,
            tasks: Mutex::new(JoinSet::new()),
            in_flight: Arc::new(in_flight),
        };

        store.refresh_banners();
        store.refresh_venues();
        Ok(store)
    }

    pub fn from_repository(repo: Arc<dyn WeddingRepository>) -> AppResult<Self> {
        Self::new(UseCases::new(repo))
    }

    // ========================================================================
    // TRIGGERS
    // ========================================================================

    pub fn register(&self, name: &str, email: &str, password: &str) {
        let stream = self.use_cases.register.register_user(name, email, password);
        self.launch("register", &self.register_state, stream);
    }

    pub fn login(&self, email: &str, password: &str) {
        let stream = self.use_cases.login.login_user(email, password);
        self.launch("login", &self.login_state, stream);
    }

    pub fn refresh_banners(&self) {
        let stream = self.use_cases.fetch_banners.fetch_banners();
        self.launch("banners", &self.banners_state, stream);
    }

    pub fn refresh_venues(&self) {
        let stream = self.use_cases.fetch_venues.fetch_venues();
        self.launch("venues", &self.venues_state, stream);
    }

    /// Validate the sign-up form, then trigger registration
    pub fn submit_registration(&self, form: &RegistrationForm) -> DomainResult<()> {
        validate_registration(form)?;
        self.register(&form.name, &form.email, &form.password);
        Ok(())
    }

    /// Validate the sign-in form, then trigger login
    pub fn submit_login(&self, form: &LoginForm) -> DomainResult<()> {
        validate_login(form)?;
        self.login(&form.email, &form.password);
        Ok(())
    }

    // ========================================================================
    // OBSERVATION
    // ========================================================================

    pub fn register_state(&self) -> watch::Receiver<RegisterScreenState> {
        self.register_state.sender.subscribe()
    }

    pub fn login_state(&self) -> watch::Receiver<LoginScreenState> {
        self.login_state.sender.subscribe()
    }

    pub fn banners_state(&self) -> watch::Receiver<BannersState> {
        self.banners_state.sender.subscribe()
    }

    pub fn venues_state(&self) -> watch::Receiver<VenuesState> {
        self.venues_state.sender.subscribe()
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            register: self.register_state.current(),
            login: self.login_state.current(),
            banners: self.banners_state.current(),
            venues: self.venues_state.current(),
        }
    }

    /// Number of consumptions still running
    pub fn in_flight(&self) -> usize {
        *self.in_flight.borrow()
    }

    /// Wait until every triggered consumption has finished
    pub async fn settle(&self) {
        let mut count = self.in_flight.subscribe();
        // the sender lives as long as self, so this cannot fail
        count.wait_for(|n| *n == 0).await.ok();
    }

    fn launch<T, S>(&self, operation: &'static str, slice: &Arc<Slice<S>>, stream: ResultStream<T>)
    where
        T: Send + 'static,
        S: OperationSlice<T>,
    {
        let generation = slice.begin();
        debug!("{} #{} triggered", operation, generation);

        self.in_flight.send_modify(|count| *count += 1);
        let guard = InFlightGuard(Arc::clone(&self.in_flight));
        let slice = Arc::clone(slice);

        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        while tasks.try_join_next().is_some() {}
        tasks.spawn_on(
            async move {
                let _guard = guard;
                consume(operation, generation, &slice, stream).await;
            },
            &self.runtime,
        );
    }
}

async fn consume<T, S>(operation: &'static str, generation: u64, slice: &Slice<S>, mut stream: ResultStream<T>)
where
    S: OperationSlice<T>,
{
    while let Some(result) = stream.next().await {
        if !slice.publish(generation, S::reduce(result)) {
            debug!("{} #{} superseded, emission dropped", operation, generation);
        }
    }
    debug!("{} #{} completed", operation, generation);
}

impl Drop for AppStore {
    fn drop(&mut self) {
        let tasks = self.tasks.get_mut().unwrap_or_else(PoisonError::into_inner);
        if !tasks.is_empty() {
            debug!("Aborting {} in-flight operations", tasks.len());
        }
        tasks.abort_all();
    }
}
