//! Order total computation.
//!
//! The stored recipe price is the full price at the recipe's base serving
//! count. Each ingredient carries an equal share of that price; deselecting
//! an ingredient removes its share. The adjusted price then scales by the
//! ratio of requested to base servings and is rounded once at the end.

/// Computes the order total in paisa.
///
/// `deselected_count` above `ingredient_count` is clamped; the result is
/// never negative. Rounds half away from zero to the nearest paisa.
pub fn order_total(
    base_price: i64,
    base_servings: u32,
    requested_servings: u32,
    ingredient_count: usize,
    deselected_count: usize,
) -> i64 {
    debug_assert!(base_servings >= 1);
    debug_assert!(requested_servings >= 1);
    debug_assert!(ingredient_count >= 1);

    let deselected = deselected_count.min(ingredient_count);
    let share = base_price as f64 / ingredient_count as f64;
    let adjusted = base_price as f64 - deselected as f64 * share;
    let scaled = adjusted * f64::from(requested_servings) / f64::from(base_servings);
    (scaled.round() as i64).max(0)
}
