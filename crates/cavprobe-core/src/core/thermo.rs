//! Conversion of probe-insertion probabilities into cavitation free energies.
//!
//! The free energy of forming an empty cavity follows from the insertion probability
//! through `ΔG = −k_B·T·N_A·ln(P0)`, reported in kJ/mol.

/// Boltzmann constant in J/K (exact, SI 2019).
pub const BOLTZMANN_J_PER_K: f64 = 1.380649e-23;

/// Avogadro constant in 1/mol (exact, SI 2019).
pub const AVOGADRO_PER_MOL: f64 = 6.02214076e23;

/// Room temperature in Kelvin.
pub const DEFAULT_TEMPERATURE_K: f64 = 298.15;

/// Molar thermal energy `k_B·T·N_A` in kJ/mol.
#[inline]
pub fn thermal_energy_kj_mol(temperature_k: f64) -> f64 {
    BOLTZMANN_J_PER_K * temperature_k * AVOGADRO_PER_MOL / 1000.0
}

/// Fraction of unobstructed probes; zero when no probes were sampled.
#[inline]
pub fn insertion_probability(empty: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        empty as f64 / total as f64
    }
}

/// Cavitation free energy in kJ/mol for an insertion probability.
///
/// A probability of zero (or below) yields `f64::INFINITY`.
pub fn cavitation_free_energy(probability: f64, temperature_k: f64) -> f64 {
    if probability > 0.0 {
        -thermal_energy_kj_mol(temperature_k) * probability.ln()
    } else {
        f64::INFINITY
    }
}
