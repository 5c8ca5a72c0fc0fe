use serde::Serialize;

/// Where the applicant is in the modal. `Submitted` is terminal until the
/// modal closes; closing drops the whole form, so reopening starts fresh.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WizardStep {
    Company,
    Business,
    Badge,
    Submitted,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Company => 1,
            WizardStep::Business => 2,
            WizardStep::Badge => 3,
            WizardStep::Submitted => 4,
        }
    }

    /// Advance one step, clamped at the badge step. Submitting is the only
    /// way past it.
    pub fn next(self) -> WizardStep {
        match self {
            WizardStep::Company => WizardStep::Business,
            WizardStep::Business => WizardStep::Badge,
            WizardStep::Badge => WizardStep::Badge,
            WizardStep::Submitted => WizardStep::Submitted,
        }
    }

    pub fn prev(self) -> WizardStep {
        match self {
            WizardStep::Company => WizardStep::Company,
            WizardStep::Business => WizardStep::Company,
            WizardStep::Badge => WizardStep::Business,
            WizardStep::Submitted => WizardStep::Submitted,
        }
    }

    /// Only valid from the badge step; everywhere else it is a no-op.
    pub fn submit(self) -> WizardStep {
        match self {
            WizardStep::Badge => WizardStep::Submitted,
            other => other,
        }
    }

    /// Fill level of the progress bar, out of the three form steps.
    pub fn progress_percent(self) -> u32 {
        match self {
            WizardStep::Submitted => 100,
            step => (u32::from(step.number()) * 100 + 1) / 3,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum CompanyStage {
    #[serde(rename = "idea")]
    Idea,
    #[serde(rename = "mvp")]
    Mvp,
    #[serde(rename = "early-revenue")]
    EarlyRevenue,
    #[serde(rename = "growth")]
    Growth,
    #[serde(rename = "scale")]
    Scale,
}

impl CompanyStage {
    pub const ALL: [CompanyStage; 5] = [
        CompanyStage::Idea,
        CompanyStage::Mvp,
        CompanyStage::EarlyRevenue,
        CompanyStage::Growth,
        CompanyStage::Scale,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CompanyStage::Idea => "idea",
            CompanyStage::Mvp => "mvp",
            CompanyStage::EarlyRevenue => "early-revenue",
            CompanyStage::Growth => "growth",
            CompanyStage::Scale => "scale",
        }
    }

    pub fn parse(value: &str) -> Option<CompanyStage> {
        CompanyStage::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            CompanyStage::Idea => "Idea Stage",
            CompanyStage::Mvp => "MVP",
            CompanyStage::EarlyRevenue => "Early Revenue",
            CompanyStage::Growth => "Growth Stage",
            CompanyStage::Scale => "Scale Stage",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum FundingBucket {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "under-100k")]
    Under100k,
    #[serde(rename = "100k-500k")]
    To500k,
    #[serde(rename = "500k-1m")]
    To1m,
    #[serde(rename = "1m-5m")]
    To5m,
    #[serde(rename = "over-5m")]
    Over5m,
}

impl FundingBucket {
    pub const ALL: [FundingBucket; 6] = [
        FundingBucket::None,
        FundingBucket::Under100k,
        FundingBucket::To500k,
        FundingBucket::To1m,
        FundingBucket::To5m,
        FundingBucket::Over5m,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FundingBucket::None => "none",
            FundingBucket::Under100k => "under-100k",
            FundingBucket::To500k => "100k-500k",
            FundingBucket::To1m => "500k-1m",
            FundingBucket::To5m => "1m-5m",
            FundingBucket::Over5m => "over-5m",
        }
    }

    pub fn parse(value: &str) -> Option<FundingBucket> {
        FundingBucket::ALL.into_iter().find(|b| b.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            FundingBucket::None => "No funding yet",
            FundingBucket::Under100k => "Under $100K",
            FundingBucket::To500k => "$100K - $500K",
            FundingBucket::To1m => "$500K - $1M",
            FundingBucket::To5m => "$1M - $5M",
            FundingBucket::Over5m => "Over $5M",
        }
    }
}

/// Certification tiers. Shared between the pricing cards on the page and the
/// final wizard step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum BadgeLevel {
    #[serde(rename = "innovation")]
    Innovation,
    #[serde(rename = "disruption")]
    Disruption,
    #[serde(rename = "global-impact")]
    GlobalImpact,
}

impl BadgeLevel {
    pub const ALL: [BadgeLevel; 3] = [
        BadgeLevel::Innovation,
        BadgeLevel::Disruption,
        BadgeLevel::GlobalImpact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BadgeLevel::Innovation => "innovation",
            BadgeLevel::Disruption => "disruption",
            BadgeLevel::GlobalImpact => "global-impact",
        }
    }

    pub fn parse(value: &str) -> Option<BadgeLevel> {
        BadgeLevel::ALL.into_iter().find(|b| b.as_str() == value)
    }

    pub fn name(self) -> &'static str {
        match self {
            BadgeLevel::Innovation => "Innovation Badge",
            BadgeLevel::Disruption => "Disruption Badge",
            BadgeLevel::GlobalImpact => "Global Impact Badge",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BadgeLevel::Innovation => "Innovation",
            BadgeLevel::Disruption => "Disruption",
            BadgeLevel::GlobalImpact => "Global Impact",
        }
    }

    pub fn price(self) -> &'static str {
        match self {
            BadgeLevel::Innovation => "$2,500",
            BadgeLevel::Disruption => "$7,500",
            BadgeLevel::GlobalImpact => "$15,000",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            BadgeLevel::Innovation => "🥉",
            BadgeLevel::Disruption => "🥈",
            BadgeLevel::GlobalImpact => "🥇",
        }
    }
}

/// Everything the applicant has typed so far. Lives only while the modal is
/// mounted; closing it drops the record.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ApplicationForm {
    pub company_name: String,
    pub founder_name: String,
    pub email: String,
    pub website: String,
    pub stage: Option<CompanyStage>,
    pub funding_raised: Option<FundingBucket>,
    pub description: String,
    pub badge_level: BadgeLevel,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        ApplicationForm {
            company_name: String::new(),
            founder_name: String::new(),
            email: String::new(),
            website: String::new(),
            stage: None,
            funding_raised: None,
            description: String::new(),
            badge_level: BadgeLevel::Innovation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApplicationForm, BadgeLevel, CompanyStage, FundingBucket, WizardStep};

    #[test]
    fn next_and_prev_stay_clamped() {
        let mut step = WizardStep::Company;
        assert_eq!(step.prev(), WizardStep::Company);
        for _ in 0..10 {
            step = step.next();
        }
        assert_eq!(step, WizardStep::Badge);
        for _ in 0..10 {
            step = step.prev();
        }
        assert_eq!(step, WizardStep::Company);
    }

    #[test]
    fn arbitrary_navigation_never_reaches_submitted() {
        // next/prev in any interleaving keep the step within the form.
        let mut step = WizardStep::Company;
        for i in 0..50 {
            step = if i % 3 == 0 { step.prev() } else { step.next() };
            assert_ne!(step, WizardStep::Submitted);
            assert!((1..=3).contains(&step.number()));
        }
    }

    #[test]
    fn submit_only_works_from_the_badge_step() {
        assert_eq!(WizardStep::Company.submit(), WizardStep::Company);
        assert_eq!(WizardStep::Business.submit(), WizardStep::Business);
        assert_eq!(WizardStep::Badge.submit(), WizardStep::Submitted);
        assert_eq!(WizardStep::Submitted.submit(), WizardStep::Submitted);
    }

    #[test]
    fn submitted_is_terminal_for_navigation() {
        assert_eq!(WizardStep::Submitted.next(), WizardStep::Submitted);
        assert_eq!(WizardStep::Submitted.prev(), WizardStep::Submitted);
    }

    #[test]
    fn progress_bar_fills_by_thirds() {
        assert_eq!(WizardStep::Company.progress_percent(), 33);
        assert_eq!(WizardStep::Business.progress_percent(), 67);
        assert_eq!(WizardStep::Badge.progress_percent(), 100);
        assert_eq!(WizardStep::Submitted.progress_percent(), 100);
    }

    #[test]
    fn full_application_flow() {
        // open modal -> fill step 1 -> next -> fill step 2 -> next ->
        // pick badge -> submit
        let mut form = ApplicationForm::default();
        let mut step = WizardStep::Company;

        form.company_name = "PayFlow Technologies".into();
        form.founder_name = "Sarah Chen".into();
        form.email = "sarah@payflow.example".into();
        step = step.next();
        assert_eq!(step, WizardStep::Business);

        form.stage = CompanyStage::parse("mvp");
        assert_eq!(form.stage, Some(CompanyStage::Mvp));
        step = step.next();
        assert_eq!(step, WizardStep::Badge);

        form.badge_level = BadgeLevel::parse("disruption").unwrap();
        step = step.submit();
        assert_eq!(step, WizardStep::Submitted);
        assert_eq!(step.number(), 4);
    }

    #[test]
    fn option_values_round_trip() {
        for stage in CompanyStage::ALL {
            assert_eq!(CompanyStage::parse(stage.as_str()), Some(stage));
        }
        for bucket in FundingBucket::ALL {
            assert_eq!(FundingBucket::parse(bucket.as_str()), Some(bucket));
        }
        for badge in BadgeLevel::ALL {
            assert_eq!(BadgeLevel::parse(badge.as_str()), Some(badge));
        }
        assert_eq!(CompanyStage::parse(""), None);
        assert_eq!(BadgeLevel::parse("platinum"), None);
    }

    #[test]
    fn default_form_is_blank_with_innovation_preselected() {
        let form = ApplicationForm::default();
        assert!(form.company_name.is_empty());
        assert!(form.stage.is_none());
        assert!(form.funding_raised.is_none());
        assert_eq!(form.badge_level, BadgeLevel::Innovation);
    }

    #[test]
    fn submission_payload_uses_the_wire_names() {
        let form = ApplicationForm {
            stage: Some(CompanyStage::EarlyRevenue),
            funding_raised: Some(FundingBucket::To500k),
            badge_level: BadgeLevel::GlobalImpact,
            ..ApplicationForm::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["stage"], "early-revenue");
        assert_eq!(json["funding_raised"], "100k-500k");
        assert_eq!(json["badge_level"], "global-impact");
    }
}
