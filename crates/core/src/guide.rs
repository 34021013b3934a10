// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Guided posting checks.
//!
//! A short scripted conversation that asks the requester about load weight,
//! budget and timeframe before a posting is published. Every answer is one of
//! a fixed set of options; there is no free-text parsing.
//!
//! ```text
//! Welcome ─begin─► Weight ─► Budget ─► Timeframe ─► Complete
//!                  (skipped for surveys)
//! ```
//!
//! An answer that breaks a rule parks the guide on a warning until the
//! requester confirms with [`Confirmation::Adjust`] (clamp to the limit) or
//! [`Confirmation::Keep`] (keep the value; the violation is reported at the
//! end).

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::job::{JobCategory, JobPosting};
use crate::validate::{
    check_budget, check_weight, validate_values, MAX_WEIGHT_LIMIT, MINIMUM_PAY_LIMIT,
};

/// Where the guide is in its script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideStep {
    Welcome,
    Weight,
    Budget,
    Timeframe,
    Complete,
}

impl GuideStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideStep::Welcome => "welcome",
            GuideStep::Weight => "weight",
            GuideStep::Budget => "budget",
            GuideStep::Timeframe => "timeframe",
            GuideStep::Complete => "complete",
        }
    }
}

impl fmt::Display for GuideStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weight bands offered to the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightOption {
    Under10,
    From10To25,
    From25To50,
    Over50,
    NotSure,
}

impl WeightOption {
    pub const ALL: [WeightOption; 5] = [
        WeightOption::Under10,
        WeightOption::From10To25,
        WeightOption::From25To50,
        WeightOption::Over50,
        WeightOption::NotSure,
    ];

    /// Representative weight of the band, in kg.
    pub fn kg(&self) -> Option<f64> {
        match self {
            WeightOption::Under10 => Some(5.0),
            WeightOption::From10To25 => Some(17.5),
            WeightOption::From25To50 => Some(37.5),
            WeightOption::Over50 => Some(75.0),
            WeightOption::NotSure => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightOption::Under10 => "Under 10kg",
            WeightOption::From10To25 => "10-25kg",
            WeightOption::From25To50 => "25-50kg",
            WeightOption::Over50 => "Over 50kg",
            WeightOption::NotSure => "Not sure",
        }
    }
}

impl FromStr for WeightOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "under-10" => Ok(WeightOption::Under10),
            "10-25" => Ok(WeightOption::From10To25),
            "25-50" => Ok(WeightOption::From25To50),
            "over-50" => Ok(WeightOption::Over50),
            "not-sure" => Ok(WeightOption::NotSure),
            _ => Err(Error::InvalidWeightOption(s.to_string())),
        }
    }
}

/// Budget choices offered to the requester.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetOption {
    Minimum,
    Kes25k,
    Kes50k,
    Kes100k,
    Custom(f64),
}

impl BudgetOption {
    pub fn amount(&self) -> f64 {
        match self {
            BudgetOption::Minimum => MINIMUM_PAY_LIMIT,
            BudgetOption::Kes25k => 25_000.0,
            BudgetOption::Kes50k => 50_000.0,
            BudgetOption::Kes100k => 100_000.0,
            BudgetOption::Custom(amount) => *amount,
        }
    }

    pub fn label(&self) -> String {
        match self {
            BudgetOption::Minimum => format!("KES {MINIMUM_PAY_LIMIT}"),
            BudgetOption::Kes25k => "KES 25,000".to_string(),
            BudgetOption::Kes50k => "KES 50,000".to_string(),
            BudgetOption::Kes100k => "KES 100,000".to_string(),
            BudgetOption::Custom(amount) => format!("KES {amount}"),
        }
    }
}

impl FromStr for BudgetOption {
    type Err = Error;

    /// Accepts `minimum`, `25k`, `50k`, `100k`, or a plain amount for a
    /// custom budget.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "minimum" => Ok(BudgetOption::Minimum),
            "25k" => Ok(BudgetOption::Kes25k),
            "50k" => Ok(BudgetOption::Kes50k),
            "100k" => Ok(BudgetOption::Kes100k),
            other => other
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .map(BudgetOption::Custom)
                .ok_or_else(|| Error::InvalidBudgetOption(s.to_string())),
        }
    }
}

/// How soon the job should be done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    SameDay,
    Within24Hours,
    Within3Days,
    WithinWeek,
    Flexible,
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [
        Timeframe::SameDay,
        Timeframe::Within24Hours,
        Timeframe::Within3Days,
        Timeframe::WithinWeek,
        Timeframe::Flexible,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::SameDay => "Same day",
            Timeframe::Within24Hours => "Within 24 hours",
            Timeframe::Within3Days => "Within 3 days",
            Timeframe::WithinWeek => "Within a week",
            Timeframe::Flexible => "Flexible",
        }
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "same-day" => Ok(Timeframe::SameDay),
            "within-24-hours" => Ok(Timeframe::Within24Hours),
            "within-3-days" => Ok(Timeframe::Within3Days),
            "within-week" => Ok(Timeframe::WithinWeek),
            "flexible" => Ok(Timeframe::Flexible),
            _ => Err(Error::InvalidTimeframe(s.to_string())),
        }
    }
}

/// Reply to a rule warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    /// Clamp the value to the rule's limit.
    Adjust,
    /// Keep the value as answered.
    Keep,
}

/// One answer from the requester.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    Weight(WeightOption),
    Budget(BudgetOption),
    Timeframe(Timeframe),
    Confirm(Confirmation),
}

impl Answer {
    fn kind(&self) -> &'static str {
        match self {
            Answer::Weight(_) => "weight",
            Answer::Budget(_) => "budget",
            Answer::Timeframe(_) => "timeframe",
            Answer::Confirm(_) => "confirmation",
        }
    }

    fn label(&self) -> String {
        match self {
            Answer::Weight(w) => w.label().to_string(),
            Answer::Budget(b) => b.label(),
            Answer::Timeframe(t) => t.label().to_string(),
            Answer::Confirm(Confirmation::Adjust) => "Yes, adjust".to_string(),
            Answer::Confirm(Confirmation::Keep) => "No, keep as is".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Guide,
    Requester,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    WeightQuestion,
    BudgetQuestion,
    TimeframeQuestion,
    Warning,
    Result,
}

/// A line in the guide transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideMessage {
    pub speaker: Speaker,
    pub kind: MessageKind,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Answers collected by a finished guide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideSummary {
    pub category: JobCategory,
    pub weight_kg: Option<f64>,
    pub weight_label: Option<String>,
    pub budget: f64,
    pub budget_label: String,
    pub timeframe: Timeframe,
    pub violations: Vec<String>,
}

impl GuideSummary {
    /// Copies the collected weight and budget onto `job`.
    pub fn apply_to(&self, mut job: JobPosting) -> JobPosting {
        job.budget = self.budget;
        if self.weight_kg.is_some() {
            job.weight_limit = self.weight_kg;
        }
        job
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Weight(f64),
    Budget,
}

/// The scripted posting guide.
#[derive(Debug, Clone)]
pub struct PostingGuide {
    category: JobCategory,
    step: GuideStep,
    pending: Option<Pending>,
    weight_kg: Option<f64>,
    weight_label: Option<String>,
    budget: Option<(f64, String)>,
    timeframe: Option<Timeframe>,
    summary: Option<GuideSummary>,
    transcript: Vec<GuideMessage>,
}

impl PostingGuide {
    /// Creates a guide for a posting of `category`, greeting the requester.
    pub fn new(category: JobCategory) -> Self {
        let mut guide = PostingGuide {
            category,
            step: GuideStep::Welcome,
            pending: None,
            weight_kg: None,
            weight_label: None,
            budget: None,
            timeframe: None,
            summary: None,
            transcript: Vec::new(),
        };
        guide.say(
            MessageKind::Text,
            format!(
                "Hi! A few quick questions will make sure your {category} job is set up correctly."
            ),
            Vec::new(),
        );
        guide
    }

    pub fn category(&self) -> JobCategory {
        self.category
    }

    pub fn step(&self) -> GuideStep {
        self.step
    }

    /// True while a rule warning waits for [`Confirmation`].
    pub fn awaiting_confirmation(&self) -> bool {
        self.pending.is_some()
    }

    pub fn transcript(&self) -> &[GuideMessage] {
        &self.transcript
    }

    /// The collected answers, once the guide is complete.
    pub fn summary(&self) -> Option<&GuideSummary> {
        self.summary.as_ref()
    }

    /// Asks the first question. No-op unless at [`GuideStep::Welcome`].
    pub fn begin(&mut self) -> GuideStep {
        if self.step == GuideStep::Welcome {
            if self.category.carries_weight() {
                self.ask_weight();
            } else {
                self.ask_budget();
            }
        }
        self.step
    }

    /// Feeds one answer and returns the step the guide moved to.
    pub fn answer(&mut self, answer: Answer) -> Result<GuideStep> {
        match (self.step, self.pending, answer) {
            (GuideStep::Weight, None, Answer::Weight(option)) => {
                self.hear(&answer);
                self.weight_label = Some(option.label().to_string());
                match option.kg() {
                    Some(kg) if !check_weight(kg).passed() => self.warn_weight(kg),
                    kg => {
                        self.weight_kg = kg;
                        self.ask_budget();
                    }
                }
            }
            (GuideStep::Weight, Some(Pending::Weight(kg)), Answer::Confirm(choice)) => {
                self.hear(&answer);
                self.pending = None;
                if choice == Confirmation::Adjust {
                    self.weight_kg = Some(MAX_WEIGHT_LIMIT);
                    self.weight_label = Some(format!("{MAX_WEIGHT_LIMIT}kg"));
                } else {
                    self.weight_kg = Some(kg);
                }
                self.ask_budget();
            }
            (GuideStep::Budget, None, Answer::Budget(option)) => {
                self.hear(&answer);
                let amount = option.amount();
                self.budget = Some((amount, option.label()));
                if check_budget(amount).passed() {
                    self.ask_timeframe();
                } else {
                    self.warn_budget(amount);
                }
            }
            (GuideStep::Budget, Some(Pending::Budget), Answer::Confirm(choice)) => {
                self.hear(&answer);
                self.pending = None;
                if choice == Confirmation::Adjust {
                    let adjusted = BudgetOption::Minimum;
                    self.budget = Some((adjusted.amount(), adjusted.label()));
                }
                self.ask_timeframe();
            }
            (GuideStep::Timeframe, None, Answer::Timeframe(timeframe)) => {
                self.hear(&answer);
                self.timeframe = Some(timeframe);
                self.complete();
            }
            _ => {
                let current = if self.pending.is_some() {
                    "confirmation"
                } else {
                    self.step.as_str()
                };
                return Err(Error::GuideOutOfTurn {
                    current,
                    answer: answer.kind(),
                });
            }
        }
        Ok(self.step)
    }

    /// Discards every answer and greets the requester again.
    pub fn restart(&mut self) {
        *self = PostingGuide::new(self.category);
    }

    fn say(&mut self, kind: MessageKind, text: String, options: Vec<String>) {
        self.transcript.push(GuideMessage {
            speaker: Speaker::Guide,
            kind,
            text,
            options,
        });
    }

    fn hear(&mut self, answer: &Answer) {
        self.transcript.push(GuideMessage {
            speaker: Speaker::Requester,
            kind: MessageKind::Text,
            text: answer.label(),
            options: Vec::new(),
        });
    }

    fn ask_weight(&mut self) {
        self.step = GuideStep::Weight;
        let options = WeightOption::ALL.iter().map(|w| w.label().to_string()).collect();
        self.say(
            MessageKind::WeightQuestion,
            format!(
                "What is the heaviest load you expect for this {} job? We recommend at most {MAX_WEIGHT_LIMIT}kg so it stays manageable for workers.",
                self.category
            ),
            options,
        );
    }

    fn ask_budget(&mut self) {
        self.step = GuideStep::Budget;
        let options = [
            BudgetOption::Minimum,
            BudgetOption::Kes25k,
            BudgetOption::Kes50k,
            BudgetOption::Kes100k,
        ]
        .iter()
        .map(BudgetOption::label)
        .chain(std::iter::once("Custom amount".to_string()))
        .collect();
        self.say(
            MessageKind::BudgetQuestion,
            format!(
                "What is your budget for this {} job? The minimum we recommend is KES {MINIMUM_PAY_LIMIT} for fair pay.",
                self.category
            ),
            options,
        );
    }

    fn ask_timeframe(&mut self) {
        self.step = GuideStep::Timeframe;
        let options = Timeframe::ALL.iter().map(|t| t.label().to_string()).collect();
        self.say(
            MessageKind::TimeframeQuestion,
            format!("Finally, when should this {} job be done?", self.category),
            options,
        );
    }

    fn warn_weight(&mut self, kg: f64) {
        self.pending = Some(Pending::Weight(kg));
        self.say(
            MessageKind::Warning,
            format!(
                "That is around {kg}kg, above the recommended {MAX_WEIGHT_LIMIT}kg. Adjust it to {MAX_WEIGHT_LIMIT}kg?"
            ),
            vec![
                format!("Yes, adjust to {MAX_WEIGHT_LIMIT}kg"),
                "No, keep as is".to_string(),
            ],
        );
    }

    fn warn_budget(&mut self, amount: f64) {
        self.pending = Some(Pending::Budget);
        self.say(
            MessageKind::Warning,
            format!(
                "A budget of KES {amount} is below the recommended KES {MINIMUM_PAY_LIMIT}. Adjust it to KES {MINIMUM_PAY_LIMIT}?"
            ),
            vec![
                format!("Yes, adjust to KES {MINIMUM_PAY_LIMIT}"),
                "No, keep as is".to_string(),
            ],
        );
    }

    fn complete(&mut self) {
        let (budget, budget_label) = self
            .budget
            .clone()
            .unwrap_or_else(|| (0.0, String::new()));
        let Some(timeframe) = self.timeframe else {
            return;
        };
        let result = validate_values(self.weight_kg, budget);

        let summary = GuideSummary {
            category: self.category,
            weight_kg: self.weight_kg,
            weight_label: self.weight_label.clone(),
            budget,
            budget_label,
            timeframe,
            violations: result.violations,
        };

        let text = if summary.violations.is_empty() {
            format!(
                "All set! Your posting meets every requirement:\n• Weight: {}\n• Budget: {}\n• Timeframe: {}",
                summary.weight_label.as_deref().unwrap_or("N/A"),
                summary.budget_label,
                summary.timeframe.label()
            )
        } else {
            let issues: Vec<String> = summary.violations.iter().map(|v| format!("• {v}")).collect();
            format!(
                "Some things need attention:\n{}\nFix them or proceed anyway?",
                issues.join("\n")
            )
        };

        self.step = GuideStep::Complete;
        self.summary = Some(summary);
        self.say(MessageKind::Result, text, Vec::new());
    }
}

#[cfg(test)]
#[path = "guide_tests.rs"]
mod tests;
