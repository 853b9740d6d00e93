//! Top-level screen switching between the wallet home, the Idikhar
//! sub-application and the plan creation wizard.

use std::fmt;

use wallet_domain::{Language, SavingsPlan};

use crate::{
    catalog::{example_plans, WalletService},
    plan_store::PlanStore,
    time::Clock,
    wizard::{BackOutcome, PlanWizard},
    CoreError,
};

/// Tabs of the Idikhar screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdikharTab {
    #[default]
    Categories,
    Savings,
}

impl IdikharTab {
    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "categories" | "category" => Some(IdikharTab::Categories),
            "savings" | "plans" => Some(IdikharTab::Savings),
            _ => None,
        }
    }
}

impl fmt::Display for IdikharTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IdikharTab::Categories => "categories",
            IdikharTab::Savings => "savings",
        };
        f.write_str(label)
    }
}

/// Screen currently mounted by the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    WalletHome,
    Idikhar(IdikharTab),
    CreatePlan,
}

/// State owned by a mounted Idikhar screen. Dropped, and with it every
/// session plan, when the user navigates back to the wallet.
#[derive(Debug, Default)]
pub struct IdikharSession {
    tab: IdikharTab,
    store: PlanStore,
    wizard: Option<PlanWizard>,
}

impl IdikharSession {
    pub fn tab(&self) -> IdikharTab {
        self.tab
    }

    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    pub fn wizard(&self) -> Option<&PlanWizard> {
        self.wizard.as_ref()
    }
}

/// Owns screen and language selection for the whole application.
#[derive(Debug, Default)]
pub struct ViewRouter {
    language: Language,
    balance_visible: bool,
    session: Option<IdikharSession>,
}

impl ViewRouter {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            balance_visible: false,
            session: None,
        }
    }

    pub fn screen(&self) -> Screen {
        match &self.session {
            None => Screen::WalletHome,
            Some(session) if session.wizard.is_some() => Screen::CreatePlan,
            Some(session) => Screen::Idikhar(session.tab),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            tracing::debug!(from = %self.language, to = %language, "language switched");
        }
        self.language = language;
    }

    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.language.toggled());
        self.language
    }

    pub fn balance_visible(&self) -> bool {
        self.balance_visible
    }

    pub fn session(&self) -> Option<&IdikharSession> {
        self.session.as_ref()
    }

    /// Shows or hides the balance on the wallet home screen.
    pub fn toggle_balance(&mut self) -> Result<bool, CoreError> {
        self.expect_screen(Screen::WalletHome)?;
        self.balance_visible = !self.balance_visible;
        Ok(self.balance_visible)
    }

    /// Opens a wallet service. Only Idikhar leads anywhere; the others are
    /// inert and return `false`.
    pub fn open_service(&mut self, service: WalletService) -> Result<bool, CoreError> {
        self.expect_screen(Screen::WalletHome)?;
        if service != WalletService::Idikhar {
            return Ok(false);
        }
        self.session = Some(IdikharSession::default());
        tracing::info!("idikhar screen mounted");
        Ok(true)
    }

    pub fn select_tab(&mut self, tab: IdikharTab) -> Result<(), CoreError> {
        let session = self.idikhar_mut()?;
        session.tab = tab;
        Ok(())
    }

    /// Mounts the creation wizard with an empty draft.
    pub fn start_plan_creation(&mut self) -> Result<(), CoreError> {
        let session = self.idikhar_mut()?;
        session.wizard = Some(PlanWizard::new());
        tracing::debug!("plan creation wizard opened");
        Ok(())
    }

    pub fn wizard_mut(&mut self) -> Result<&mut PlanWizard, CoreError> {
        self.session
            .as_mut()
            .and_then(|session| session.wizard.as_mut())
            .ok_or_else(|| CoreError::InvalidOperation("no plan is being created".into()))
    }

    /// Back navigation from whichever screen is mounted.
    pub fn back(&mut self) -> Result<Screen, CoreError> {
        match self.screen() {
            Screen::WalletHome => {
                return Err(CoreError::InvalidOperation(
                    "already on the wallet home screen".into(),
                ))
            }
            Screen::Idikhar(_) => {
                self.session = None;
                tracing::info!("idikhar screen unmounted");
            }
            Screen::CreatePlan => {
                let outcome = self.wizard_mut()?.back();
                if outcome == BackOutcome::Cancelled {
                    self.close_wizard();
                }
            }
        }
        Ok(self.screen())
    }

    /// Confirms the wizard summary, stores the new plan and returns to the
    /// savings tab. On failure the wizard stays open with its draft.
    pub fn confirm_plan(&mut self, clock: &dyn Clock) -> Result<SavingsPlan, CoreError> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| CoreError::InvalidOperation("no plan is being created".into()))?;
        let wizard = session
            .wizard
            .take()
            .ok_or_else(|| CoreError::InvalidOperation("no plan is being created".into()))?;
        match wizard.confirm(clock, &mut session.store) {
            Ok(plan) => {
                session.tab = IdikharTab::Savings;
                Ok(plan)
            }
            Err((wizard, err)) => {
                session.wizard = Some(wizard);
                Err(err)
            }
        }
    }

    /// Example plans in the current language followed by the session plans.
    pub fn savings_plans(&self) -> Vec<SavingsPlan> {
        let examples = example_plans(self.language);
        match &self.session {
            Some(session) => session
                .store
                .merged(&examples)
                .into_iter()
                .cloned()
                .collect(),
            None => examples,
        }
    }

    fn close_wizard(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.wizard = None;
            session.tab = IdikharTab::Savings;
        }
    }

    fn idikhar_mut(&mut self) -> Result<&mut IdikharSession, CoreError> {
        match self.session.as_mut() {
            Some(session) if session.wizard.is_none() => Ok(session),
            Some(_) => Err(CoreError::InvalidOperation(
                "finish or cancel the plan being created first".into(),
            )),
            None => Err(CoreError::InvalidOperation(
                "open Idikhar from the wallet home first".into(),
            )),
        }
    }

    fn expect_screen(&self, expected: Screen) -> Result<(), CoreError> {
        let current = self.screen();
        if current == expected {
            Ok(())
        } else {
            Err(CoreError::InvalidOperation(format!(
                "not available on the {} screen",
                screen_name(current)
            )))
        }
    }
}

fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::WalletHome => "wallet home",
        Screen::Idikhar(_) => "Idikhar",
        Screen::CreatePlan => "plan creation",
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use wallet_domain::{DraftUpdate, PlanCategory};

    use super::*;
    use crate::time::FixedClock;

    fn open_idikhar() -> ViewRouter {
        let mut router = ViewRouter::new(Language::Fr);
        assert!(router.open_service(WalletService::Idikhar).unwrap());
        router
    }

    fn fill(router: &mut ViewRouter) {
        let wizard = router.wizard_mut().unwrap();
        wizard.update(DraftUpdate::Title("Études".into()));
        wizard.update(DraftUpdate::TargetAmount("6000".into()));
        wizard.update(DraftUpdate::Duration("6".into()));
        wizard.update(DraftUpdate::Category(PlanCategory::Education));
    }

    #[test]
    fn starts_on_wallet_home() {
        let router = ViewRouter::new(Language::Ar);
        assert_eq!(router.screen(), Screen::WalletHome);
        assert_eq!(router.language(), Language::Ar);
        assert!(!router.balance_visible());
    }

    #[test]
    fn only_idikhar_service_navigates() {
        let mut router = ViewRouter::new(Language::Fr);
        assert!(!router.open_service(WalletService::Withdrawal).unwrap());
        assert_eq!(router.screen(), Screen::WalletHome);
        assert!(router.open_service(WalletService::Idikhar).unwrap());
        assert_eq!(router.screen(), Screen::Idikhar(IdikharTab::Categories));
    }

    #[test]
    fn balance_toggle_only_on_home() {
        let mut router = ViewRouter::new(Language::Fr);
        assert!(router.toggle_balance().unwrap());
        assert!(!router.toggle_balance().unwrap());
        router.open_service(WalletService::Idikhar).unwrap();
        assert!(router.toggle_balance().is_err());
    }

    #[test]
    fn cancelling_wizard_returns_to_savings_tab() {
        let mut router = open_idikhar();
        router.start_plan_creation().unwrap();
        assert_eq!(router.screen(), Screen::CreatePlan);
        assert!(router.select_tab(IdikharTab::Categories).is_err());
        assert_eq!(router.back().unwrap(), Screen::Idikhar(IdikharTab::Savings));
    }

    #[test]
    fn summary_back_stays_in_wizard() {
        let mut router = open_idikhar();
        router.start_plan_creation().unwrap();
        fill(&mut router);
        router.wizard_mut().unwrap().advance().unwrap();
        assert_eq!(router.back().unwrap(), Screen::CreatePlan);
        assert_eq!(router.wizard_mut().unwrap().draft().title, "Études");
    }

    #[test]
    fn confirmed_plan_is_listed_after_examples() {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        let mut router = open_idikhar();
        let examples = router.savings_plans().len();

        router.start_plan_creation().unwrap();
        fill(&mut router);
        router.wizard_mut().unwrap().advance().unwrap();
        let plan = router.confirm_plan(&clock).unwrap();

        assert_eq!(router.screen(), Screen::Idikhar(IdikharTab::Savings));
        let plans = router.savings_plans();
        assert_eq!(plans.len(), examples + 1);
        assert_eq!(plans.last(), Some(&plan));
        assert_eq!(plan.monthly_amount, 1000);
    }

    #[test]
    fn failed_confirmation_keeps_wizard_open() {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        let mut router = open_idikhar();
        router.start_plan_creation().unwrap();
        fill(&mut router);
        router
            .wizard_mut()
            .unwrap()
            .update(DraftUpdate::Duration("six".into()));
        router.wizard_mut().unwrap().advance().unwrap();

        assert!(matches!(
            router.confirm_plan(&clock),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(router.screen(), Screen::CreatePlan);
    }

    #[test]
    fn remounting_idikhar_resets_session_plans() {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        let mut router = open_idikhar();
        router.start_plan_creation().unwrap();
        fill(&mut router);
        router.wizard_mut().unwrap().advance().unwrap();
        router.confirm_plan(&clock).unwrap();
        assert_eq!(router.session().unwrap().store().len(), 1);

        assert_eq!(router.back().unwrap(), Screen::WalletHome);
        router.open_service(WalletService::Idikhar).unwrap();
        assert!(router.session().unwrap().store().is_empty());
        assert_eq!(router.savings_plans().len(), 4);
    }

    #[test]
    fn language_survives_remount() {
        let mut router = open_idikhar();
        assert_eq!(router.toggle_language(), Language::Ar);
        router.back().unwrap();
        router.open_service(WalletService::Idikhar).unwrap();
        assert_eq!(router.language(), Language::Ar);
        assert_eq!(router.savings_plans()[0].title, "عطلة الصيف");
    }
}
