//! Constructors for the named example machines.
//!
//! Every constructor is pure: it builds a fresh definition on each call.
//! All machines share the bottom sentinel `$` and accept in `qf`.

use crate::machine::{Machine, MachineBuilder};

crate::state_enum! {
    /// States used by the catalog machines.
    pub enum Phase {
        Q0 as "q0",
        Q1 as "q1",
        Q2 as "q2",
        Qf as "qf",
    }
}

use Phase::{Q0, Q1, Q2, Qf};

const BOTTOM: char = '$';

fn base(states: &[Phase]) -> MachineBuilder<Phase> {
    MachineBuilder::new()
        .states(states.iter().copied())
        .start(Q0)
        .accept(Qf)
        .stack_bottom(BOTTOM)
}

fn finish(builder: MachineBuilder<Phase>) -> Machine<Phase> {
    builder
        .build_checked()
        .expect("catalog machine should always be well formed")
}

/// Balanced parentheses.
pub fn balanced_parentheses() -> Machine<Phase> {
    finish(
        base(&[Q0, Qf])
            .on(Q0, '(', '$', Q0, "A$")
            .on(Q0, '(', 'A', Q0, "AA")
            .on(Q0, ')', 'A', Q0, "")
            .on_epsilon(Q0, '$', Qf, "$"),
    )
}

/// aⁿbⁿ for n ≥ 1.
pub fn anbn() -> Machine<Phase> {
    finish(
        base(&[Q0, Q1, Qf])
            .on(Q0, 'a', '$', Q0, "A$")
            .on(Q0, 'a', 'A', Q0, "AA")
            .on(Q0, 'b', 'A', Q1, "")
            .on(Q1, 'b', 'A', Q1, "")
            .on_epsilon(Q1, '$', Qf, "$"),
    )
}

/// Any string over {a, b}. Pushes nothing; the stack tops other than `$`
/// are unreachable but kept so the machine reads the same as its table.
pub fn a_plus_b_star() -> Machine<Phase> {
    finish(
        base(&[Q0, Qf])
            .on(Q0, 'a', '$', Q0, "$")
            .on(Q0, 'a', 'a', Q0, "a")
            .on(Q0, 'a', 'b', Q0, "b")
            .on(Q0, 'b', '$', Q0, "$")
            .on(Q0, 'b', 'a', Q0, "a")
            .on(Q0, 'b', 'b', Q0, "b")
            .on_epsilon(Q0, '$', Qf, "$"),
    )
}

/// Palindromes over {a, b}, even and odd length.
///
/// Push the first half, guess the middle (optionally skipping one symbol
/// for odd lengths), then match the second half against the stack.
pub fn palindrome() -> Machine<Phase> {
    let mut builder = base(&[Q0, Q1, Qf]);
    for symbol in ['a', 'b'] {
        for top in ['$', 'a', 'b'] {
            let push: String = [symbol, top].iter().collect();
            let keep = top.to_string();
            builder = builder
                .on(Q0, symbol, top, Q0, &push)
                .on(Q0, symbol, top, Q1, &keep);
        }
    }
    for top in ['$', 'a', 'b'] {
        builder = builder.on_epsilon(Q0, top, Q1, &top.to_string());
    }
    finish(
        builder
            .on(Q1, 'a', 'a', Q1, "")
            .on(Q1, 'b', 'b', Q1, "")
            .on_epsilon(Q1, '$', Qf, "$"),
    )
}

/// aⁿbⁿc*.
pub fn anbn_c_star() -> Machine<Phase> {
    finish(
        base(&[Q0, Q1, Qf])
            .on(Q0, 'a', '$', Q0, "A$")
            .on(Q0, 'a', 'A', Q0, "AA")
            .on(Q0, 'b', 'A', Q1, "")
            .on(Q1, 'b', 'A', Q1, "")
            .on(Q1, 'c', '$', Q1, "$")
            .on_epsilon(Q1, '$', Qf, "$"),
    )
}

/// wwʳ: a string followed by its reverse.
pub fn wwr() -> Machine<Phase> {
    let mut builder = base(&[Q0, Q1, Qf]);
    for symbol in ['a', 'b'] {
        for top in ['$', 'a', 'b'] {
            let push: String = [symbol, top].iter().collect();
            builder = builder.on(Q0, symbol, top, Q0, &push);
        }
    }
    for top in ['$', 'a', 'b'] {
        builder = builder.on_epsilon(Q0, top, Q1, &top.to_string());
    }
    finish(
        builder
            .on(Q1, 'a', 'a', Q1, "")
            .on(Q1, 'b', 'b', Q1, "")
            .on_epsilon(Q1, '$', Qf, "$"),
    )
}

/// a²ⁿbⁿ: one `A` per pair of a's, popped one per b.
pub fn a2n_b() -> Machine<Phase> {
    finish(
        base(&[Q0, Q1, Q2, Qf])
            .on(Q0, 'a', '$', Q1, "$")
            .on(Q0, 'a', 'A', Q1, "A")
            .on(Q1, 'a', '$', Q0, "A$")
            .on(Q1, 'a', 'A', Q0, "AA")
            .on(Q0, 'b', 'A', Q2, "")
            .on(Q2, 'b', 'A', Q2, "")
            .on_epsilon(Q2, '$', Qf, "$"),
    )
}

/// aⁿbᵐcⁿ⁺ᵐ: push one symbol per a or b, pop one per c.
pub fn a_b_equal_c() -> Machine<Phase> {
    finish(
        base(&[Q0, Qf])
            .on(Q0, 'a', '$', Q0, "A$")
            .on(Q0, 'a', 'A', Q0, "AA")
            .on(Q0, 'a', 'B', Q0, "AB")
            .on(Q0, 'b', '$', Q0, "B$")
            .on(Q0, 'b', 'A', Q0, "BA")
            .on(Q0, 'b', 'B', Q0, "BB")
            .on(Q0, 'c', 'A', Q0, "")
            .on(Q0, 'c', 'B', Q0, "")
            .on_epsilon(Q0, '$', Qf, "$"),
    )
}
