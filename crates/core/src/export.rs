//! Report context handed to the export/email collaborator.
//!
//! The core knows nothing about PDF layout or SMTP delivery; it only
//! assembles the figures and account metadata a renderer needs, plus a
//! plain-text body for the email collaborator. No currency or locale
//! formatting here.

use serde::{Deserialize, Serialize};

use crate::aggregation::AggregateSnapshot;
use crate::period::PeriodKey;

/// Everything an external renderer needs for one monthly report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Business name from the account.
    pub business_name: String,
    /// Business type from the account.
    pub business_type: String,
    /// Owner name from the account.
    pub owner_name: String,
    /// Period the report covers.
    pub period: PeriodKey,
    /// Derived totals for the period.
    pub snapshot: AggregateSnapshot,
}

impl MonthlyReport {
    /// Subject line for the report email.
    #[must_use]
    pub fn subject(&self) -> String {
        format!("Monthly P&L report - {}", self.period)
    }

    /// Renders the plain-text body for the email collaborator.
    #[must_use]
    pub fn render_text(&self) -> String {
        format!(
            "Hi {owner},\n\n\
             Here is the monthly profit & loss report for {business} ({period}).\n\n\
             Total revenue:   {revenue}\n\
             Variable costs:  {variable}\n\
             Fixed costs:     {fixed}\n\
             Total costs:     {costs}\n\
             Net profit:      {profit}\n\
             Margin:          {margin}%\n\n\
             Generated by ProfitPulse.\n",
            owner = self.owner_name,
            business = self.business_name,
            period = self.period,
            revenue = self.snapshot.total_revenue.round_dp(2),
            variable = self.snapshot.variable_costs.round_dp(2),
            fixed = self.snapshot.fixed_costs.round_dp(2),
            costs = self.snapshot.total_costs.round_dp(2),
            profit = self.snapshot.net_profit.round_dp(2),
            margin = self.snapshot.margin_percent.round_dp(2),
        )
    }
}
