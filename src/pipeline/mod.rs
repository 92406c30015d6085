pub mod stage1_score;
pub mod stage2_consistency;
pub mod stage3_aggregate;
pub mod stage4_radar;
pub mod stage5_report;
