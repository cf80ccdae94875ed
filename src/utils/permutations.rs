use log::debug;

/// Advance `values` to the next lexicographic ordering under `f64::total_cmp`.
/// Returns false once the last ordering has been reached.
fn next_permutation(values: &mut [f64]) -> bool {
    let Some(pivot) = values
        .windows(2)
        .rposition(|pair| pair[0].total_cmp(&pair[1]).is_lt())
    else {
        return false;
    };

    let Some(successor) = values
        .iter()
        .rposition(|v| v.total_cmp(&values[pivot]).is_gt())
    else {
        return false;
    };

    values.swap(pivot, successor);
    values[pivot + 1..].reverse();
    true
}

/// Sorted copy of the operands with `-0.0` folded into `0.0`, so the two zeros
/// count as one value.
fn sorted_operands(operands: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = operands
        .iter()
        .map(|&v| if v == 0.0 { 0.0 } else { v })
        .collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Every distinct ordering of the operand multiset, in lexicographic order.
///
/// Equal values collapse, so `[1, 1, 2]` yields three orderings rather than six.
pub fn distinct_permutations(operands: &[f64]) -> Vec<Vec<f64>> {
    if operands.is_empty() {
        return Vec::new();
    }

    let mut current = sorted_operands(operands);

    let mut result = vec![current.clone()];
    while next_permutation(&mut current) {
        result.push(current.clone());
    }

    debug!(
        "Generated {} distinct orderings of {} operands",
        result.len(),
        operands.len()
    );
    result
}

/// Number of distinct orderings, the multinomial coefficient over each run of
/// equal values. Saturates at `u128::MAX`.
pub fn count_distinct_permutations(operands: &[f64]) -> u128 {
    if operands.is_empty() {
        return 0;
    }

    let sorted = sorted_operands(operands);
    let mut placed: u128 = 0;
    let mut count: u128 = 1;

    for run in sorted.chunk_by(|a, b| a.total_cmp(b).is_eq()) {
        // C(placed + run, run), built so every intermediate quotient is exact
        let mut binomial: u128 = 1;
        for i in 1..=run.len() as u128 {
            let Some(next) = binomial.checked_mul(placed + i) else {
                return u128::MAX;
            };
            binomial = next / i;
        }
        placed += run.len() as u128;

        let Some(next) = count.checked_mul(binomial) else {
            return u128::MAX;
        };
        count = next;
    }

    count
}
