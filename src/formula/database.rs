use crate::units::UnitVector;

/// One symbol appearing in a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// LaTeX name, e.g. `F` or `\lambda`.
    pub name:        &'static str,
    /// Dimension vector of the symbol.
    pub unit:        UnitVector,
    /// Human-readable description, e.g. "Force".
    pub description: &'static str,
    /// Physical constants never count as caller-supplied inputs.
    pub constant:    bool,
}

/// A reference formula, stated as solved for one of its variables.
///
/// Each algebraic rearrangement is its own entry, so `F = ma` and
/// `a = \frac{F}{m}` sit side by side with different [`Formula::solve_for`]
/// names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    /// Display name, e.g. `Newton's Second Law (solve for F)`.
    pub name:      &'static str,
    /// The rearranged equation in LaTeX.
    pub latex:     &'static str,
    /// Every symbol of the equation, the solved-for one included.
    pub variables: &'static [Variable],
    /// Name of the variable this rearrangement isolates.
    pub solve_for: &'static str,
    /// Topic grouping; search results overwrite this with `---` tags on
    /// supporting formulas.
    pub category:  &'static str,
}

impl Formula {
    /// Dimension vector this formula produces, if the solved-for name
    /// appears among its variables.
    #[must_use]
    pub fn output(&self) -> Option<UnitVector> {
        self.variables
            .iter()
            .find(|variable| variable.name == self.solve_for)
            .map(|variable| variable.unit)
    }
}

const LENGTH: UnitVector = UnitVector::METRE;
const TIME: UnitVector = UnitVector::SECOND;
const MASS: UnitVector = UnitVector::KILOGRAM;
const CURRENT: UnitVector = UnitVector::AMPERE;
const TEMPERATURE: UnitVector = UnitVector::KELVIN;
const FREQUENCY: UnitVector = UnitVector::HERTZ;
const FORCE: UnitVector = UnitVector::NEWTON;
const PRESSURE: UnitVector = UnitVector::PASCAL;
const ENERGY: UnitVector = UnitVector::JOULE;
const POWER: UnitVector = UnitVector::WATT;
const CHARGE: UnitVector = UnitVector::COULOMB;
const VOLTAGE: UnitVector = UnitVector::VOLT;
const RESISTANCE: UnitVector = UnitVector::OHM;

const VELOCITY: UnitVector = UnitVector([1, -1, 0, 0, 0, 0, 0]);
const ACCELERATION: UnitVector = UnitVector([1, -2, 0, 0, 0, 0, 0]);
const MOMENTUM: UnitVector = UnitVector([1, -1, 1, 0, 0, 0, 0]);
const AREA: UnitVector = UnitVector([2, 0, 0, 0, 0, 0, 0]);
const VOLUME: UnitVector = UnitVector([3, 0, 0, 0, 0, 0, 0]);
const DENSITY: UnitVector = UnitVector([-3, 0, 1, 0, 0, 0, 0]);
const SPRING_CONSTANT: UnitVector = UnitVector([0, -2, 1, 0, 0, 0, 0]);
const ELECTRIC_FIELD: UnitVector = UnitVector([1, -3, 1, -1, 0, 0, 0]);
const SPECIFIC_HEAT: UnitVector = UnitVector([2, -2, 0, 0, -1, 0, 0]);
const GRAVITATION_CONSTANT: UnitVector = UnitVector([3, -2, -1, 0, 0, 0, 0]);
const COULOMB_CONSTANT: UnitVector = UnitVector([3, -4, 1, -2, 0, 0, 0]);
const PLANCK_CONSTANT: UnitVector = UnitVector([2, -1, 1, 0, 0, 0, 0]);

const fn input(name: &'static str, unit: UnitVector, description: &'static str) -> Variable {
    Variable { name, unit, description, constant: false }
}

const fn fixed(name: &'static str, unit: UnitVector, description: &'static str) -> Variable {
    Variable { name, unit, description, constant: true }
}

/// Every formula the searcher knows, grouped by category.
pub static FORMULAS: &[Formula] = &[
    // Kinematics
    Formula {
        name:      "Velocity with Acceleration (solve for v)",
        latex:     "v = v_0 + at",
        variables: &[
            input("v", VELOCITY, "Final velocity"),
            input("v_0", VELOCITY, "Initial velocity"),
            input("a", ACCELERATION, "Acceleration"),
            input("t", TIME, "Time"),
        ],
        solve_for: "v",
        category:  "Kinematics",
    },
    Formula {
        name:      "Velocity with Acceleration (solve for a)",
        latex:     "a = \\frac{v - v_0}{t}",
        variables: &[
            input("a", ACCELERATION, "Acceleration"),
            input("v", VELOCITY, "Final velocity"),
            input("v_0", VELOCITY, "Initial velocity"),
            input("t", TIME, "Time"),
        ],
        solve_for: "a",
        category:  "Kinematics",
    },
    Formula {
        name:      "Velocity with Acceleration (solve for t)",
        latex:     "t = \\frac{v - v_0}{a}",
        variables: &[
            input("t", TIME, "Time"),
            input("v", VELOCITY, "Final velocity"),
            input("v_0", VELOCITY, "Initial velocity"),
            input("a", ACCELERATION, "Acceleration"),
        ],
        solve_for: "t",
        category:  "Kinematics",
    },
    Formula {
        name:      "Position with Acceleration (solve for x)",
        latex:     "x = x_0 + v_0 t + \\frac{1}{2}at^2",
        variables: &[
            input("x", LENGTH, "Final position"),
            input("x_0", LENGTH, "Initial position"),
            input("v_0", VELOCITY, "Initial velocity"),
            input("t", TIME, "Time"),
            input("a", ACCELERATION, "Acceleration"),
        ],
        solve_for: "x",
        category:  "Kinematics",
    },
    Formula {
        name:      "Velocity-Position Relation (solve for v)",
        latex:     "v^2 = v_0^2 + 2a(x - x_0)",
        variables: &[
            input("v", VELOCITY, "Final velocity"),
            input("v_0", VELOCITY, "Initial velocity"),
            input("a", ACCELERATION, "Acceleration"),
            input("x", LENGTH, "Final position"),
            input("x_0", LENGTH, "Initial position"),
        ],
        solve_for: "v",
        category:  "Kinematics",
    },
    // Dynamics
    Formula {
        name:      "Newton's Second Law (solve for F)",
        latex:     "F = ma",
        variables: &[
            input("F", FORCE, "Force"),
            input("m", MASS, "Mass"),
            input("a", ACCELERATION, "Acceleration"),
        ],
        solve_for: "F",
        category:  "Dynamics",
    },
    Formula {
        name:      "Newton's Second Law (solve for m)",
        latex:     "m = \\frac{F}{a}",
        variables: &[
            input("m", MASS, "Mass"),
            input("F", FORCE, "Force"),
            input("a", ACCELERATION, "Acceleration"),
        ],
        solve_for: "m",
        category:  "Dynamics",
    },
    Formula {
        name:      "Newton's Second Law (solve for a)",
        latex:     "a = \\frac{F}{m}",
        variables: &[
            input("a", ACCELERATION, "Acceleration"),
            input("F", FORCE, "Force"),
            input("m", MASS, "Mass"),
        ],
        solve_for: "a",
        category:  "Dynamics",
    },
    Formula {
        name:      "Weight (solve for W)",
        latex:     "W = mg",
        variables: &[
            input("W", FORCE, "Weight"),
            input("m", MASS, "Mass"),
            fixed("g", ACCELERATION, "Gravitational acceleration"),
        ],
        solve_for: "W",
        category:  "Dynamics",
    },
    Formula {
        name:      "Hooke's Law (solve for F)",
        latex:     "F = kx",
        variables: &[
            input("F", FORCE, "Spring force"),
            input("k", SPRING_CONSTANT, "Spring constant"),
            input("x", LENGTH, "Displacement"),
        ],
        solve_for: "F",
        category:  "Dynamics",
    },
    Formula {
        name:      "Work (solve for W)",
        latex:     "W = Fd",
        variables: &[
            input("W", ENERGY, "Work"),
            input("F", FORCE, "Force"),
            input("d", LENGTH, "Displacement"),
        ],
        solve_for: "W",
        category:  "Dynamics",
    },
    Formula {
        name:      "Work (solve for F)",
        latex:     "F = \\frac{W}{d}",
        variables: &[
            input("F", FORCE, "Force"),
            input("W", ENERGY, "Work"),
            input("d", LENGTH, "Displacement"),
        ],
        solve_for: "F",
        category:  "Dynamics",
    },
    Formula {
        name:      "Centripetal Acceleration (solve for a_c)",
        latex:     "a_c = \\frac{v^2}{r}",
        variables: &[
            input("a_c", ACCELERATION, "Centripetal acceleration"),
            input("v", VELOCITY, "Tangential velocity"),
            input("r", LENGTH, "Radius"),
        ],
        solve_for: "a_c",
        category:  "Dynamics",
    },
    Formula {
        name:      "Impulse (solve for J)",
        latex:     "J = F\\Delta t",
        variables: &[
            input("J", MOMENTUM, "Impulse"),
            input("F", FORCE, "Force"),
            input("\\Delta t", TIME, "Time interval"),
        ],
        solve_for: "J",
        category:  "Dynamics",
    },
    // Energy
    Formula {
        name:      "Kinetic Energy (solve for KE)",
        latex:     "KE = \\frac{1}{2}mv^2",
        variables: &[
            input("KE", ENERGY, "Kinetic energy"),
            input("m", MASS, "Mass"),
            input("v", VELOCITY, "Velocity"),
        ],
        solve_for: "KE",
        category:  "Energy",
    },
    Formula {
        name:      "Kinetic Energy (solve for v)",
        latex:     "v = \\sqrt{\\frac{2KE}{m}}",
        variables: &[
            input("v", VELOCITY, "Velocity"),
            input("KE", ENERGY, "Kinetic energy"),
            input("m", MASS, "Mass"),
        ],
        solve_for: "v",
        category:  "Energy",
    },
    Formula {
        name:      "Gravitational Potential Energy (solve for PE)",
        latex:     "PE = mgh",
        variables: &[
            input("PE", ENERGY, "Potential energy"),
            input("m", MASS, "Mass"),
            fixed("g", ACCELERATION, "Gravitational acceleration"),
            input("h", LENGTH, "Height"),
        ],
        solve_for: "PE",
        category:  "Energy",
    },
    Formula {
        name:      "Power from Work (solve for P)",
        latex:     "P = \\frac{W}{t}",
        variables: &[
            input("P", POWER, "Power"),
            input("W", ENERGY, "Work"),
            input("t", TIME, "Time"),
        ],
        solve_for: "P",
        category:  "Energy",
    },
    Formula {
        name:      "Power from Work (solve for W)",
        latex:     "W = Pt",
        variables: &[
            input("W", ENERGY, "Work"),
            input("P", POWER, "Power"),
            input("t", TIME, "Time"),
        ],
        solve_for: "W",
        category:  "Energy",
    },
    // Momentum
    Formula {
        name:      "Momentum (solve for p)",
        latex:     "p = mv",
        variables: &[
            input("p", MOMENTUM, "Momentum"),
            input("m", MASS, "Mass"),
            input("v", VELOCITY, "Velocity"),
        ],
        solve_for: "p",
        category:  "Momentum",
    },
    Formula {
        name:      "Momentum (solve for v)",
        latex:     "v = \\frac{p}{m}",
        variables: &[
            input("v", VELOCITY, "Velocity"),
            input("p", MOMENTUM, "Momentum"),
            input("m", MASS, "Mass"),
        ],
        solve_for: "v",
        category:  "Momentum",
    },
    // Gravity
    Formula {
        name:      "Universal Gravitation (solve for F)",
        latex:     "F = G\\frac{m_1 m_2}{r^2}",
        variables: &[
            input("F", FORCE, "Gravitational force"),
            fixed("G", GRAVITATION_CONSTANT, "Gravitational constant"),
            input("m_1", MASS, "Mass 1"),
            input("m_2", MASS, "Mass 2"),
            input("r", LENGTH, "Distance"),
        ],
        solve_for: "F",
        category:  "Gravity",
    },
    // Circuits
    Formula {
        name:      "Ohm's Law (solve for V)",
        latex:     "V = IR",
        variables: &[
            input("V", VOLTAGE, "Voltage"),
            input("I", CURRENT, "Current"),
            input("R", RESISTANCE, "Resistance"),
        ],
        solve_for: "V",
        category:  "Circuits",
    },
    Formula {
        name:      "Ohm's Law (solve for I)",
        latex:     "I = \\frac{V}{R}",
        variables: &[
            input("I", CURRENT, "Current"),
            input("V", VOLTAGE, "Voltage"),
            input("R", RESISTANCE, "Resistance"),
        ],
        solve_for: "I",
        category:  "Circuits",
    },
    Formula {
        name:      "Ohm's Law (solve for R)",
        latex:     "R = \\frac{V}{I}",
        variables: &[
            input("R", RESISTANCE, "Resistance"),
            input("V", VOLTAGE, "Voltage"),
            input("I", CURRENT, "Current"),
        ],
        solve_for: "R",
        category:  "Circuits",
    },
    Formula {
        name:      "Electric Power (solve for P)",
        latex:     "P = IV",
        variables: &[
            input("P", POWER, "Power"),
            input("I", CURRENT, "Current"),
            input("V", VOLTAGE, "Voltage"),
        ],
        solve_for: "P",
        category:  "Circuits",
    },
    Formula {
        name:      "Power from Current (solve for P)",
        latex:     "P = I^2 R",
        variables: &[
            input("P", POWER, "Power"),
            input("I", CURRENT, "Current"),
            input("R", RESISTANCE, "Resistance"),
        ],
        solve_for: "P",
        category:  "Circuits",
    },
    Formula {
        name:      "Power from Voltage (solve for P)",
        latex:     "P = \\frac{V^2}{R}",
        variables: &[
            input("P", POWER, "Power"),
            input("V", VOLTAGE, "Voltage"),
            input("R", RESISTANCE, "Resistance"),
        ],
        solve_for: "P",
        category:  "Circuits",
    },
    // Electrostatics
    Formula {
        name:      "Coulomb's Law (solve for F)",
        latex:     "F = k \\frac{q_1 q_2}{r^2}",
        variables: &[
            input("F", FORCE, "Force"),
            fixed("k", COULOMB_CONSTANT, "Coulomb's constant"),
            input("q_1", CHARGE, "Charge 1"),
            input("q_2", CHARGE, "Charge 2"),
            input("r", LENGTH, "Distance"),
        ],
        solve_for: "F",
        category:  "Electrostatics",
    },
    Formula {
        name:      "Electric Field from Force (solve for E)",
        latex:     "E = \\frac{F}{q}",
        variables: &[
            input("E", ELECTRIC_FIELD, "Electric field"),
            input("F", FORCE, "Force"),
            input("q", CHARGE, "Charge"),
        ],
        solve_for: "E",
        category:  "Electrostatics",
    },
    Formula {
        name:      "Electric Field from Force (solve for F)",
        latex:     "F = Eq",
        variables: &[
            input("F", FORCE, "Force"),
            input("E", ELECTRIC_FIELD, "Electric field"),
            input("q", CHARGE, "Charge"),
        ],
        solve_for: "F",
        category:  "Electrostatics",
    },
    // Waves
    Formula {
        name:      "Wave Velocity (solve for v)",
        latex:     "v = f\\lambda",
        variables: &[
            input("v", VELOCITY, "Wave velocity"),
            input("f", FREQUENCY, "Frequency"),
            input("\\lambda", LENGTH, "Wavelength"),
        ],
        solve_for: "v",
        category:  "Waves",
    },
    Formula {
        name:      "Wave Velocity (solve for f)",
        latex:     "f = \\frac{v}{\\lambda}",
        variables: &[
            input("f", FREQUENCY, "Frequency"),
            input("v", VELOCITY, "Wave velocity"),
            input("\\lambda", LENGTH, "Wavelength"),
        ],
        solve_for: "f",
        category:  "Waves",
    },
    Formula {
        name:      "Wave Velocity (solve for lambda)",
        latex:     "\\lambda = \\frac{v}{f}",
        variables: &[
            input("\\lambda", LENGTH, "Wavelength"),
            input("v", VELOCITY, "Wave velocity"),
            input("f", FREQUENCY, "Frequency"),
        ],
        solve_for: "\\lambda",
        category:  "Waves",
    },
    // Fluids
    Formula {
        name:      "Pressure (solve for P)",
        latex:     "P = \\frac{F}{A}",
        variables: &[
            input("P", PRESSURE, "Pressure"),
            input("F", FORCE, "Force"),
            input("A", AREA, "Area"),
        ],
        solve_for: "P",
        category:  "Fluids",
    },
    Formula {
        name:      "Density (solve for rho)",
        latex:     "\\rho = \\frac{m}{V}",
        variables: &[
            input("\\rho", DENSITY, "Density"),
            input("m", MASS, "Mass"),
            input("V", VOLUME, "Volume"),
        ],
        solve_for: "\\rho",
        category:  "Fluids",
    },
    // Thermodynamics
    Formula {
        name:      "Heat Transfer (solve for Q)",
        latex:     "Q = mc\\Delta T",
        variables: &[
            input("Q", ENERGY, "Heat"),
            input("m", MASS, "Mass"),
            input("c", SPECIFIC_HEAT, "Specific heat capacity"),
            input("\\Delta T", TEMPERATURE, "Temperature change"),
        ],
        solve_for: "Q",
        category:  "Thermodynamics",
    },
    // Modern physics
    Formula {
        name:      "Photon Energy (solve for E)",
        latex:     "E = hf",
        variables: &[
            input("E", ENERGY, "Energy"),
            fixed("h", PLANCK_CONSTANT, "Planck's constant"),
            input("f", FREQUENCY, "Frequency"),
        ],
        solve_for: "E",
        category:  "Modern Physics",
    },
    Formula {
        name:      "de Broglie Wavelength (solve for lambda)",
        latex:     "\\lambda = \\frac{h}{p}",
        variables: &[
            input("\\lambda", LENGTH, "Wavelength"),
            fixed("h", PLANCK_CONSTANT, "Planck's constant"),
            input("p", MOMENTUM, "Momentum"),
        ],
        solve_for: "\\lambda",
        category:  "Modern Physics",
    },
    Formula {
        name:      "Mass-Energy Equivalence (solve for E)",
        latex:     "E = mc^2",
        variables: &[
            input("E", ENERGY, "Energy"),
            input("m", MASS, "Mass"),
            fixed("c", VELOCITY, "Speed of light"),
        ],
        solve_for: "E",
        category:  "Modern Physics",
    },
];

#[cfg(test)]
mod tests {
    use super::FORMULAS;

    #[test]
    fn every_formula_solves_for_one_of_its_variables() {
        for formula in FORMULAS {
            assert!(formula.output().is_some(),
                    "{} does not list {} among its variables",
                    formula.name,
                    formula.solve_for);
        }
    }

    #[test]
    fn every_name_carries_a_solve_for_suffix() {
        for formula in FORMULAS {
            assert!(formula.name.contains("(solve for "),
                    "{} lacks a solve-for suffix",
                    formula.name);
        }
    }
}
