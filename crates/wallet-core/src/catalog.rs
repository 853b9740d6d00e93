//! Built-in data shown alongside session state: example plans, the monthly
//! category spend and the wallet home services.

use chrono::NaiveDate;
use wallet_domain::{
    CategorySpend, Language, PlanCategory, PlanStatus, SavingsPlan, SpendCategory,
};

use crate::locale::LocaleText;

/// Balance shown on the wallet and Idikhar headers.
pub const WALLET_BALANCE: f64 = 15_847.0;
/// Net change of the balance over the current month.
pub const MONTHLY_CHANGE: f64 = 2_340.0;
pub const ACCOUNT_HOLDER: &str = "Mama Mohamed Amar Jewda";

pub const CATEGORY_SPEND: [CategorySpend; 6] = [
    CategorySpend::new(SpendCategory::Food, 2_850.0, 4_000.0),
    CategorySpend::new(SpendCategory::Transport, 1_200.0, 2_000.0),
    CategorySpend::new(SpendCategory::Housing, 3_500.0, 4_000.0),
    CategorySpend::new(SpendCategory::Entertainment, 450.0, 800.0),
    CategorySpend::new(SpendCategory::Shopping, 890.0, 1_500.0),
    CategorySpend::new(SpendCategory::Health, 320.0, 1_000.0),
];

/// Example plans listed before the session plans, titled in `language`.
pub fn example_plans(language: Language) -> Vec<SavingsPlan> {
    let t = &LocaleText::for_language(language).savings;
    vec![
        example(1, t.vacation, 15_000.0, 8_500.0, PlanStatus::Active, (2024, 6, 15), 1_500, PlanCategory::Vacation),
        example(2, t.emergency, 25_000.0, 18_750.0, PlanStatus::Active, (2024, 12, 31), 2_000, PlanCategory::Emergency),
        example(3, t.house, 100_000.0, 45_000.0, PlanStatus::Active, (2026, 3, 15), 3_000, PlanCategory::House),
        example(4, t.car, 12_000.0, 12_000.0, PlanStatus::Completed, (2024, 1, 15), 1_200, PlanCategory::Car),
    ]
}

#[allow(clippy::too_many_arguments)]
fn example(
    id: u64,
    title: &str,
    target: f64,
    saved: f64,
    status: PlanStatus,
    (year, month, day): (i32, u32, u32),
    monthly_amount: u64,
    category: PlanCategory,
) -> SavingsPlan {
    SavingsPlan {
        id,
        title: title.to_string(),
        target,
        saved,
        status,
        end_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        monthly_amount,
        category,
        description: None,
    }
}

/// Services offered on the wallet home screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalletService {
    MoneyTransfer,
    BillPayment,
    PhoneTopUp,
    Withdrawal,
    Gimtel,
    MerchantPayment,
    Idikhar,
}

impl WalletService {
    pub const MAIN: [WalletService; 2] = [WalletService::MoneyTransfer, WalletService::BillPayment];

    pub const QUICK: [WalletService; 5] = [
        WalletService::PhoneTopUp,
        WalletService::Withdrawal,
        WalletService::Gimtel,
        WalletService::MerchantPayment,
        WalletService::Idikhar,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WalletService::MoneyTransfer => "transfert d'argent",
            WalletService::BillPayment => "paiement de factures",
            WalletService::PhoneTopUp => "Recharge téléphonique",
            WalletService::Withdrawal => "Retrait",
            WalletService::Gimtel => "GIMTEL",
            WalletService::MerchantPayment => "paiement commerçant",
            WalletService::Idikhar => "Idikhar",
        }
    }

    /// Short token accepted by the shell.
    pub fn key(self) -> &'static str {
        match self {
            WalletService::MoneyTransfer => "transfer",
            WalletService::BillPayment => "bills",
            WalletService::PhoneTopUp => "topup",
            WalletService::Withdrawal => "withdrawal",
            WalletService::Gimtel => "gimtel",
            WalletService::MerchantPayment => "merchant",
            WalletService::Idikhar => "idikhar",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase();
        Self::MAIN
            .into_iter()
            .chain(Self::QUICK)
            .find(|service| {
                service.key() == normalized || service.title().to_lowercase() == normalized
            })
    }
}

/// Labels of the wallet bottom navigation bar; the first entry is the active one.
pub const BOTTOM_NAVIGATION: [&str; 4] = ["Tableau de bord", "Transactions", "Localisateur", "Menu"];
