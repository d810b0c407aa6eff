// ==========================================
// 工厂生产看板 - 数值清洗
// ==========================================
// 红线: NaN / 无穷 / 负数一律按 0 处理，不向下游传播
// ==========================================

/// 非负有限数；否则返回 0
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// 可选值清洗：缺失或非法 → None
pub fn positive_opt(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// 件数清洗（负数按 0）
pub fn non_negative_count(value: i64) -> f64 {
    value.max(0) as f64
}

/// 百分比：分母 <= 0 时返回 0
pub fn pct(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        non_negative(numerator * 100.0 / denominator)
    } else {
        0.0
    }
}
