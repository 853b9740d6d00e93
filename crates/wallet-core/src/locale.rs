//! Fixed display strings for the two supported languages.

use wallet_domain::{
    DraftField, DurationUnit, Language, PlanCategory, PlanStatus, Priority, SpendCategory,
};

use crate::progress_service::RemainingTime;

/// Strings for the Idikhar screen chrome and tabs.
#[derive(Debug)]
pub struct IdikharText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub categories_tab: &'static str,
    pub savings_tab: &'static str,
    pub categories_title: &'static str,
    pub savings_title: &'static str,
    pub automatic_badge: &'static str,
    pub balance: &'static str,
    pub this_month: &'static str,
    pub create_plan: &'static str,
    /// Label of the button switching to the other language.
    pub switch_language: &'static str,
}

/// Strings for the savings plan list.
#[derive(Debug)]
pub struct SavingsText {
    pub active_plans: &'static str,
    pub completed: &'static str,
    pub in_progress: &'static str,
    pub paused: &'static str,
    pub target: &'static str,
    pub saved: &'static str,
    pub remaining: &'static str,
    pub months_left: &'static str,
    pub days_left: &'static str,
    pub next_payment: &'static str,
    pub end_date: &'static str,
    pub vacation: &'static str,
    pub emergency: &'static str,
    pub house: &'static str,
    pub car: &'static str,
}

/// Strings for the transaction category dashboard.
#[derive(Debug)]
pub struct CategoriesText {
    pub food: &'static str,
    pub transport: &'static str,
    pub housing: &'static str,
    pub entertainment: &'static str,
    pub shopping: &'static str,
    pub health: &'static str,
    pub spent: &'static str,
    pub of: &'static str,
    pub this_month: &'static str,
    pub remaining: &'static str,
}

/// Strings for the plan creation wizard.
#[derive(Debug)]
pub struct WizardText {
    pub title: &'static str,
    pub step: &'static str,
    pub of: &'static str,
    pub goal_details: &'static str,
    pub plan_title: &'static str,
    pub title_placeholder: &'static str,
    pub description: &'static str,
    pub description_placeholder: &'static str,
    pub target_amount: &'static str,
    pub amount_placeholder: &'static str,
    pub duration: &'static str,
    pub duration_placeholder: &'static str,
    pub duration_type: &'static str,
    pub months: &'static str,
    pub years: &'static str,
    pub category: &'static str,
    pub select_category: &'static str,
    pub vacation: &'static str,
    pub emergency: &'static str,
    pub house: &'static str,
    pub car: &'static str,
    pub education: &'static str,
    pub other: &'static str,
    pub priority: &'static str,
    pub low: &'static str,
    pub medium: &'static str,
    pub high: &'static str,
    pub next: &'static str,
    pub back: &'static str,
    pub plan_summary: &'static str,
    pub monthly_amount: &'static str,
    pub total_duration: &'static str,
    pub create_plan: &'static str,
    pub plan_created: &'static str,
    pub fill_required: &'static str,
    pub missing_fields: &'static str,
    pub error_title: &'static str,
    pub success_title: &'static str,
}

/// Complete string table for one language.
#[derive(Debug)]
pub struct LocaleText {
    pub language: Language,
    pub idikhar: IdikharText,
    pub savings: SavingsText,
    pub categories: CategoriesText,
    pub wizard: WizardText,
}

impl LocaleText {
    pub fn for_language(language: Language) -> &'static LocaleText {
        match language {
            Language::Fr => &FRENCH,
            Language::Ar => &ARABIC,
        }
    }

    pub fn plan_category(&self, category: PlanCategory) -> &'static str {
        let w = &self.wizard;
        match category {
            PlanCategory::Vacation => w.vacation,
            PlanCategory::Emergency => w.emergency,
            PlanCategory::House => w.house,
            PlanCategory::Car => w.car,
            PlanCategory::Education => w.education,
            PlanCategory::Other => w.other,
        }
    }

    /// Form label of a wizard field.
    pub fn field_label(&self, field: DraftField) -> &'static str {
        let w = &self.wizard;
        match field {
            DraftField::Title => w.plan_title,
            DraftField::Description => w.description,
            DraftField::TargetAmount => w.target_amount,
            DraftField::Duration => w.duration,
            DraftField::DurationUnit => w.duration_type,
            DraftField::Category => w.category,
            DraftField::Priority => w.priority,
        }
    }

    /// "Champs manquants: Nom du plan, Catégorie".
    pub fn missing_fields_hint(&self, fields: &[DraftField]) -> String {
        let labels: Vec<&str> = fields.iter().map(|field| self.field_label(*field)).collect();
        format!("{}: {}", self.wizard.missing_fields, labels.join(", "))
    }

    pub fn priority(&self, priority: Priority) -> &'static str {
        match priority {
            Priority::Low => self.wizard.low,
            Priority::Medium => self.wizard.medium,
            Priority::High => self.wizard.high,
        }
    }

    pub fn duration_unit(&self, unit: DurationUnit) -> &'static str {
        match unit {
            DurationUnit::Months => self.wizard.months,
            DurationUnit::Years => self.wizard.years,
        }
    }

    pub fn status_badge(&self, status: PlanStatus) -> &'static str {
        match status {
            PlanStatus::Active => self.savings.in_progress,
            PlanStatus::Completed => self.savings.completed,
            PlanStatus::Paused => self.savings.paused,
        }
    }

    pub fn spend_category(&self, category: SpendCategory) -> &'static str {
        let c = &self.categories;
        match category {
            SpendCategory::Food => c.food,
            SpendCategory::Transport => c.transport,
            SpendCategory::Housing => c.housing,
            SpendCategory::Entertainment => c.entertainment,
            SpendCategory::Shopping => c.shopping,
            SpendCategory::Health => c.health,
        }
    }

    /// "12 mois restants", "3 jours restants" or the completed badge.
    pub fn remaining_time(&self, remaining: RemainingTime) -> String {
        match remaining {
            RemainingTime::Months(months) => format!("{months} {}", self.savings.months_left),
            RemainingTime::Days(days) => format!("{days} {}", self.savings.days_left),
            RemainingTime::Completed => self.savings.completed.to_string(),
        }
    }

    /// "Étape 1 sur 2".
    pub fn step_label(&self, number: u8, total: u8) -> String {
        format!("{} {number} {} {total}", self.wizard.step, self.wizard.of)
    }
}

pub static FRENCH: LocaleText = LocaleText {
    language: Language::Fr,
    idikhar: IdikharText {
        title: "Idikhar",
        subtitle: "Votre assistant financier intelligent",
        categories_tab: "Catégories",
        savings_tab: "Épargne",
        categories_title: "Catégorisation automatique",
        savings_title: "Plans d'épargne",
        automatic_badge: "Automatique",
        balance: "Solde disponible",
        this_month: "Ce mois",
        create_plan: "Créer un plan",
        switch_language: "العربية",
    },
    savings: SavingsText {
        active_plans: "Plans actifs",
        completed: "Terminés",
        in_progress: "En cours",
        paused: "En pause",
        target: "Objectif",
        saved: "Épargné",
        remaining: "Restant",
        months_left: "mois restants",
        days_left: "jours restants",
        next_payment: "Prochain versement",
        end_date: "Date de fin",
        vacation: "Vacances d'été",
        emergency: "Fonds d'urgence",
        house: "Achat maison",
        car: "Nouvelle voiture",
    },
    categories: CategoriesText {
        food: "Alimentation",
        transport: "Transport",
        housing: "Logement",
        entertainment: "Loisirs",
        shopping: "Shopping",
        health: "Santé",
        spent: "dépensé",
        of: "sur",
        this_month: "ce mois",
        remaining: "restant",
    },
    wizard: WizardText {
        title: "Créer un nouveau plan",
        step: "Étape",
        of: "sur",
        goal_details: "Détails de l'objectif",
        plan_title: "Nom du plan",
        title_placeholder: "Ex: Vacances d'été, Nouvelle voiture...",
        description: "Description (optionnel)",
        description_placeholder: "Décrivez votre objectif...",
        target_amount: "Montant objectif",
        amount_placeholder: "Ex: 15000",
        duration: "Durée",
        duration_placeholder: "Ex: 12",
        duration_type: "Type",
        months: "Mois",
        years: "Années",
        category: "Catégorie",
        select_category: "Sélectionner une catégorie",
        vacation: "Vacances",
        emergency: "Urgence",
        house: "Logement",
        car: "Transport",
        education: "Éducation",
        other: "Autre",
        priority: "Priorité",
        low: "Faible",
        medium: "Moyenne",
        high: "Élevée",
        next: "Suivant",
        back: "Retour",
        plan_summary: "Résumé du plan",
        monthly_amount: "Versement mensuel suggéré",
        total_duration: "Durée totale",
        create_plan: "Créer le plan",
        plan_created: "Plan d'épargne créé avec succès!",
        fill_required: "Veuillez remplir tous les champs obligatoires",
        missing_fields: "Champs manquants",
        error_title: "Erreur",
        success_title: "Succès",
    },
};

pub static ARABIC: LocaleText = LocaleText {
    language: Language::Ar,
    idikhar: IdikharText {
        title: "إدخار",
        subtitle: "مساعدك المالي الذكي",
        categories_tab: "الفئات",
        savings_tab: "الادخار",
        categories_title: "التصنيف التلقائي",
        savings_title: "خطط الادخار",
        automatic_badge: "تلقائي",
        balance: "الرصيد المتاح",
        this_month: "هذا الشهر",
        create_plan: "إنشاء خطة",
        switch_language: "Français",
    },
    savings: SavingsText {
        active_plans: "الخطط النشطة",
        completed: "مكتملة",
        in_progress: "قيد التنفيذ",
        paused: "متوقفة",
        target: "الهدف",
        saved: "مُدخر",
        remaining: "المتبقي",
        months_left: "شهر متبقي",
        days_left: "يوم متبقي",
        next_payment: "الدفعة التالية",
        end_date: "تاريخ الانتهاء",
        vacation: "عطلة الصيف",
        emergency: "صندوق الطوارئ",
        house: "شراء منزل",
        car: "سيارة جديدة",
    },
    categories: CategoriesText {
        food: "الطعام",
        transport: "المواصلات",
        housing: "السكن",
        entertainment: "الترفيه",
        shopping: "التسوق",
        health: "الصحة",
        spent: "مُنفق",
        of: "من",
        this_month: "هذا الشهر",
        remaining: "متبقي",
    },
    wizard: WizardText {
        title: "إنشاء خطة جديدة",
        step: "الخطوة",
        of: "من",
        goal_details: "تفاصيل الهدف",
        plan_title: "اسم الخطة",
        title_placeholder: "مثال: عطلة الصيف، سيارة جديدة...",
        description: "الوصف (اختياري)",
        description_placeholder: "اوصف هدفك...",
        target_amount: "المبلغ المطلوب",
        amount_placeholder: "مثال: 15000",
        duration: "المدة",
        duration_placeholder: "مثال: 12",
        duration_type: "النوع",
        months: "شهر",
        years: "سنة",
        category: "الفئة",
        select_category: "اختر فئة",
        vacation: "عطلة",
        emergency: "طوارئ",
        house: "سكن",
        car: "مواصلات",
        education: "تعليم",
        other: "أخرى",
        priority: "الأولوية",
        low: "منخفضة",
        medium: "متوسطة",
        high: "عالية",
        next: "التالي",
        back: "العودة",
        plan_summary: "ملخص الخطة",
        monthly_amount: "المبلغ الشهري المقترح",
        total_duration: "المدة الإجمالية",
        create_plan: "إنشاء الخطة",
        plan_created: "تم إنشاء خطة الادخار بنجاح!",
        fill_required: "يرجى ملء جميع الحقول المطلوبة",
        missing_fields: "الحقول الناقصة",
        error_title: "خطأ",
        success_title: "نجاح",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_language_resolves_its_own_table() {
        assert_eq!(LocaleText::for_language(Language::Fr).language, Language::Fr);
        assert_eq!(LocaleText::for_language(Language::Ar).language, Language::Ar);
    }

    #[test]
    fn remaining_time_is_localised() {
        let fr = LocaleText::for_language(Language::Fr);
        assert_eq!(fr.remaining_time(RemainingTime::Months(4)), "4 mois restants");
        assert_eq!(fr.remaining_time(RemainingTime::Days(2)), "2 jours restants");
        assert_eq!(fr.remaining_time(RemainingTime::Completed), "Terminés");

        let ar = LocaleText::for_language(Language::Ar);
        assert_eq!(ar.remaining_time(RemainingTime::Months(4)), "4 شهر متبقي");
    }

    #[test]
    fn missing_fields_hint_uses_form_labels() {
        let fields = [DraftField::Title, DraftField::Category];
        assert_eq!(
            LocaleText::for_language(Language::Fr).missing_fields_hint(&fields),
            "Champs manquants: Nom du plan, Catégorie"
        );
        assert_eq!(
            LocaleText::for_language(Language::Ar).missing_fields_hint(&fields),
            "الحقول الناقصة: اسم الخطة, الفئة"
        );
    }

    #[test]
    fn step_label_reads_naturally() {
        let fr = LocaleText::for_language(Language::Fr);
        assert_eq!(fr.step_label(1, 2), "Étape 1 sur 2");
    }
}
