//! Dashboard summary and trend calculations.

use rust_decimal::Decimal;

use super::types::{MonthNetProfit, MonthOverMonth, PeriodSummary, TrendStatistics};
use crate::aggregation::AggregateSnapshot;
use crate::period::PeriodKey;

/// Service deriving dashboard views from aggregate snapshots.
pub struct DashboardService;

impl DashboardService {
    /// Percentage change from `previous` to `current`.
    ///
    /// `None` when the previous value is zero; the original product shows
    /// "n/a" rather than a fabricated number.
    #[must_use]
    pub fn change_percent(current: Decimal, previous: Decimal) -> Option<Decimal> {
        if previous.is_zero() {
            None
        } else {
            Some(((current - previous) / previous) * Decimal::ONE_HUNDRED)
        }
    }

    /// Builds the summary for one month, with month-over-month changes when
    /// the previous month has data.
    #[must_use]
    pub fn summarize(
        period: PeriodKey,
        current: AggregateSnapshot,
        previous: Option<&AggregateSnapshot>,
    ) -> PeriodSummary {
        let changes = previous.map(|prev| MonthOverMonth {
            total_revenue: Self::change_percent(current.total_revenue, prev.total_revenue),
            variable_costs: Self::change_percent(current.variable_costs, prev.variable_costs),
            fixed_costs: Self::change_percent(current.fixed_costs, prev.fixed_costs),
            total_costs: Self::change_percent(current.total_costs, prev.total_costs),
            net_profit: Self::change_percent(current.net_profit, prev.net_profit),
            margin_percent: Self::change_percent(current.margin_percent, prev.margin_percent),
        });

        PeriodSummary {
            period,
            snapshot: current,
            changes,
        }
    }

    /// Folds a window of months into trend statistics.
    ///
    /// An empty window yields all-zero totals and no best/worst month.
    #[must_use]
    pub fn trend_statistics(months: &[(PeriodKey, AggregateSnapshot)]) -> TrendStatistics {
        let mut total_revenue = Decimal::ZERO;
        let mut total_costs = Decimal::ZERO;
        let mut total_net_profit = Decimal::ZERO;
        let mut margin_sum = Decimal::ZERO;
        let mut best: Option<MonthNetProfit> = None;
        let mut worst: Option<MonthNetProfit> = None;

        for &(period, snapshot) in months {
            total_revenue += snapshot.total_revenue;
            total_costs += snapshot.total_costs;
            total_net_profit += snapshot.net_profit;
            margin_sum += snapshot.margin_percent;

            let entry = MonthNetProfit {
                period,
                net_profit: snapshot.net_profit,
            };
            if best.is_none_or(|b| entry.net_profit > b.net_profit) {
                best = Some(entry);
            }
            if worst.is_none_or(|w| entry.net_profit < w.net_profit) {
                worst = Some(entry);
            }
        }

        let average_margin_percent = if months.is_empty() {
            Decimal::ZERO
        } else {
            (margin_sum / Decimal::from(months.len() as u64)).round_dp(2)
        };

        TrendStatistics {
            total_revenue,
            total_costs,
            total_net_profit,
            average_margin_percent,
            best_month: best,
            worst_month: worst,
            months_count: months.len(),
        }
    }
}
