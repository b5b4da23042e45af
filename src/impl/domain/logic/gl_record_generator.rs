use tracing::debug;

use crate::{
    domain::logic::seed::seed_from_id,
    entities::{
        AssetDepreciation, GlReconciliationRecord, LinkedTransaction, QuarterlyAmounts,
        YearlyPoFinancial, YearlyQuarters,
    },
};

pub(crate) const GL_RECORD_COUNT: u32 = 50;

const FIRST_RECORD_NUMBER: u32 = 2_025_001;
const DEPRECIATION_PER_PERIOD: f64 = 1200.0;
const ASSET_COST: f64 = 50_000.0;

fn amounts(actual: f64, commit: f64, forecast: f64) -> QuarterlyAmounts {
    QuarterlyAmounts {
        actual,
        commit,
        forecast,
    }
}

fn transaction(
    i: u32,
    n: u32,
    base_amount: f64,
    share: f64,
    (date, description, gl_code, transaction_type): (&str, &str, &str, &str),
    dept: &str,
) -> LinkedTransaction {
    LinkedTransaction {
        id: format!("TX-{}-{}", i, n),
        date: date.to_string(),
        description: description.to_string(),
        amount: base_amount * share,
        gl_code: gl_code.to_string(),
        posted_by: "SYSTEM_AUTO".to_string(),
        dept_code: dept.to_string(),
        fiscal_quarter: format!("Q{}", i % 4 + 1),
        fiscal_period: format!("P{}", i % 12 + 1),
        transaction_type: transaction_type.to_string(),
        po_number: Some(format!("PO-{}", 3000 + i)),
    }
}

/// The `i`-th GL reconciliation record. Amounts derive from the record id,
/// so the same index always yields the same record.
pub(crate) fn gl_record(i: u32) -> GlReconciliationRecord {
    let id = format!("GL-REC-{}", FIRST_RECORD_NUMBER + i);
    let base_amount = f64::from(seed_from_id(&id) % 50_000 + 10_000);
    let dept = format!("D-{}", 1000 + i % 10);
    let period = i % 12 + 1;

    GlReconciliationRecord {
        dept_level2: "Technology & Digital".to_string(),
        dept_level3: if i % 2 == 0 { "Software Engineering" } else { "Infrastructure & Ops" }
            .to_string(),
        dept_level4: if i % 3 == 0 { "Cloud Services" } else { "Enterprise Applications" }
            .to_string(),
        dept_level5: format!("Team {}", ["Alpha", "Beta", "Gamma"][(i % 3) as usize]),
        dept_number: dept.clone(),
        fiscal_year: if i % 2 == 0 { "2024" } else { "2025" }.to_string(),
        fiscal_quarter: format!("Q{}", i % 4 + 1),
        fiscal_month: format!("M{}", period),
        actual_amount: base_amount,
        linked_transactions: vec![
            transaction(
                i,
                1,
                base_amount,
                0.6,
                ("2024-09-15", "Cloud Compute Instance Usage", "5001-COMPUTE", "Accrual"),
                &dept,
            ),
            transaction(
                i,
                2,
                base_amount,
                0.4,
                ("2024-09-20", "Storage Allocations", "5002-STORAGE", "Journal Entry"),
                &dept,
            ),
        ],
        asset_depreciations: vec![AssetDepreciation {
            id: format!("AST-{}-1", i),
            asset_id: format!("A-{}", 5000 + i),
            asset_name: "Server Rack X1".to_string(),
            depreciation_amount: DEPRECIATION_PER_PERIOD,
            period: format!("P{}", period),
            accumulated_depreciation: DEPRECIATION_PER_PERIOD * f64::from(period),
            net_book_value: ASSET_COST - DEPRECIATION_PER_PERIOD * f64::from(period),
        }],
        yearly_po_financials: vec![
            YearlyPoFinancial {
                po_number: format!("PO-{}", 3000 + i),
                vendor: "AMAZON WEB SERVICES".to_string(),
                project: "Cloud Migration".to_string(),
                department: dept.clone(),
                quarters: YearlyQuarters {
                    q1: amounts(25_000.0, 30_000.0, 30_000.0),
                    q2: amounts(28_000.0, 30_000.0, 32_000.0),
                    q3: amounts(0.0, 35_000.0, 35_000.0),
                    q4: amounts(0.0, 40_000.0, 40_000.0),
                },
                total_amount: 1_200_000.0,
            },
            YearlyPoFinancial {
                po_number: format!("PO-{}", 4000 + i),
                vendor: "ORACLE CORPORATION".to_string(),
                project: "ERP Upgrade".to_string(),
                department: dept,
                quarters: YearlyQuarters {
                    q1: amounts(12_000.0, 12_000.0, 12_000.0),
                    q2: amounts(15_000.0, 15_000.0, 15_000.0),
                    q3: amounts(0.0, 18_000.0, 18_000.0),
                    q4: amounts(0.0, 18_000.0, 18_000.0),
                },
                total_amount: 500_000.0,
            },
        ],
        id,
    }
}

pub(crate) fn gl_records() -> Vec<GlReconciliationRecord> {
    debug!(count = GL_RECORD_COUNT, "generating GL reconciliation records");
    (0..GL_RECORD_COUNT).map(gl_record).collect()
}
