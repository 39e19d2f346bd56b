use super::model;
use crate::layout::toast_service::ToastService;
use crate::shared::view_lifetime::ViewLifetime;
use contracts::domain::a003_donation::aggregate::{MonthlyDonationTotals, RecentDonation};
use contracts::domain::a003_donation::form::{DonationSubmission, SubmitBlocked};
use contracts::domain::a003_donation::validation::DonationField;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Recent donors shown next to the form
pub const RECENT_DONORS_LIMIT: u32 = 3;

/// ViewModel for the donation section
#[derive(Clone, Copy)]
pub struct DonationViewModel {
    pub submission: RwSignal<DonationSubmission>,
    /// Field highlighted after a failed validation
    pub field_error: RwSignal<Option<DonationField>>,
    pub recent: RwSignal<Vec<RecentDonation>>,
    pub totals: RwSignal<MonthlyDonationTotals>,
    lifetime: StoredValue<ViewLifetime>,
}

impl DonationViewModel {
    /// Must be created inside the owning component
    pub fn new() -> Self {
        Self {
            submission: RwSignal::new(DonationSubmission::default()),
            field_error: RwSignal::new(None),
            recent: RwSignal::new(Vec::new()),
            totals: RwSignal::new(MonthlyDonationTotals::default()),
            lifetime: StoredValue::new(ViewLifetime::new()),
        }
    }

    fn is_alive(&self) -> bool {
        self.lifetime
            .try_get_value()
            .is_some_and(|lifetime| lifetime.is_alive())
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.with(|s| s.is_submitting)
    }

    pub fn update_form(&self, f: impl FnOnce(&mut DonationSubmission)) {
        self.submission.update(f);
        self.field_error.set(None);
    }

    /// Fetch recent donors and monthly totals.
    ///
    /// A failed donors request empties the list; a failed totals request keeps
    /// the values already shown.
    pub fn load_aggregates(&self) {
        let recent = self.recent;
        let totals = self.totals;
        let Some(lifetime) = self.lifetime.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let donors = model::fetch_recent_donations(RECENT_DONORS_LIMIT)
                .await
                .unwrap_or_else(|e| {
                    log::warn!("recent donations unavailable: {}", e);
                    Vec::new()
                });
            lifetime.deliver(donors, |donors| recent.set(donors));

            match model::fetch_monthly_totals().await {
                Ok(value) => {
                    lifetime.deliver(value, |value| totals.set(value));
                }
                Err(e) => log::warn!("monthly totals unavailable: {}", e),
            }
        });
    }

    /// Validate, send, then report the outcome and reload the aggregates
    pub fn submit_command(&self, toasts: ToastService) {
        let mut started = Err(SubmitBlocked::InFlight);
        self.submission.update(|s| started = s.begin());

        let request = match started {
            Ok(request) => request,
            Err(SubmitBlocked::InFlight) => return,
            Err(SubmitBlocked::Invalid(e)) => {
                self.field_error.set(e.field());
                toasts.error(e.title(), e.to_string());
                return;
            }
        };
        self.field_error.set(None);

        let this = *self;
        spawn_local(async move {
            let result = model::submit_donation(&request).await;
            if let Err(e) = &result {
                log::error!("donation submit failed: {}", e);
            }
            if !this.is_alive() {
                return;
            }
            let Some(outcome) = this.submission.try_update(|s| s.finish(&request, result)) else {
                return;
            };
            if outcome.needs_refresh() {
                toasts.success(outcome.title(), outcome.description());
                this.load_aggregates();
            } else {
                toasts.error(outcome.title(), outcome.description());
            }
        });
    }
}
