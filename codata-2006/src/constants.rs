//! CODATA 2006 recommended values of the fundamental physical constants.
//!
//! One [`PhysicalConstant`] record per entry of the 2006 table published by
//! the Committee on Data (CODATA) of the International Science Council,
//! transcribed from the NIST machine-readable table:
//! <https://physics.nist.gov/cuu/Constants/Table/allascii.txt>
//!
//! Identifiers are the published names with punctuation stripped and word
//! separators mapped to `_` (so `electron mag. mom.` becomes
//! [`ELECTRON_MAG_MOM`]). Dimensionless entries carry an empty unit string.
//! Entries are independent transcriptions: no record is computed from
//! another, even where a physical relation exists.

use codata_core::PhysicalConstant;

/// lattice spacing of silicon = (1.920155762e-10 ± 5e-18) m.
pub const LATTICE_SPACING_OF_SILICON: PhysicalConstant =
    PhysicalConstant::new("lattice spacing of silicon", 1.920155762e-10, 5e-18, "m");

/// alpha particle-electron mass ratio = (7294.2995365 ± 3.1e-06).
pub const ALPHA_PARTICLE_ELECTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("alpha particle-electron mass ratio", 7294.2995365, 3.1e-06, "");

/// alpha particle mass = (6.6446562e-27 ± 3.3e-34) kg.
pub const ALPHA_PARTICLE_MASS: PhysicalConstant =
    PhysicalConstant::new("alpha particle mass", 6.6446562e-27, 3.3e-34, "kg");

/// alpha particle mass energy equivalent = (5.97191917e-10 ± 3e-17) J.
pub const ALPHA_PARTICLE_MASS_ENERGY_EQUIVALENT: PhysicalConstant =
    PhysicalConstant::new("alpha particle mass energy equivalent", 5.97191917e-10, 3e-17, "J");

/// alpha particle mass energy equivalent in MeV = (3727.379109 ± 9.3e-05) MeV.
pub const ALPHA_PARTICLE_MASS_ENERGY_EQUIVALENT_IN_MEV: PhysicalConstant = PhysicalConstant::new(
    "alpha particle mass energy equivalent in MeV",
    3727.379109,
    9.3e-05,
    "MeV",
);

/// alpha particle mass in u = (4.001506179127 ± 6.2e-11) u.
pub const ALPHA_PARTICLE_MASS_IN_U: PhysicalConstant =
    PhysicalConstant::new("alpha particle mass in u", 4.001506179127, 6.2e-11, "u");

/// alpha particle molar mass = (0.004001506179127 ± 6.2e-14) kg mol^-1.
pub const ALPHA_PARTICLE_MOLAR_MASS: PhysicalConstant =
    PhysicalConstant::new("alpha particle molar mass", 0.004001506179127, 6.2e-14, "kg mol^-1");

/// alpha particle-proton mass ratio = (3.97259968951 ± 4.1e-10).
pub const ALPHA_PARTICLE_PROTON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("alpha particle-proton mass ratio", 3.97259968951, 4.1e-10, "");

/// Angstrom star = (1.00001498e-10 ± 9e-17) m.
pub const ANGSTROM_STAR: PhysicalConstant =
    PhysicalConstant::new("Angstrom star", 1.00001498e-10, 9e-17, "m");

/// atomic mass constant = (1.660538782e-27 ± 8.3e-35) kg.
pub const ATOMIC_MASS_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("atomic mass constant", 1.660538782e-27, 8.3e-35, "kg");

/// atomic mass constant energy equivalent = (1.49241783e-10 ± 7.4e-18) J.
pub const ATOMIC_MASS_CONSTANT_ENERGY_EQUIVALENT: PhysicalConstant =
    PhysicalConstant::new("atomic mass constant energy equivalent", 1.49241783e-10, 7.4e-18, "J");

/// atomic mass constant energy equivalent in MeV = (931.494028 ± 2.3e-05) MeV.
pub const ATOMIC_MASS_CONSTANT_ENERGY_EQUIVALENT_IN_MEV: PhysicalConstant = PhysicalConstant::new(
    "atomic mass constant energy equivalent in MeV",
    931.494028,
    2.3e-05,
    "MeV",
);

/// atomic mass unit-electron volt relationship = (931494028.0 ± 23.0) eV.
pub const ATOMIC_MASS_UNIT_ELECTRON_VOLT_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("atomic mass unit-electron volt relationship", 931494028.0, 23.0, "eV");

/// atomic mass unit-hartree relationship = (34231777.149 ± 0.049) E_h.
pub const ATOMIC_MASS_UNIT_HARTREE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("atomic mass unit-hartree relationship", 34231777.149, 0.049, "E_h");

/// atomic mass unit-hertz relationship = (2.2523427369e+23 ± 320000000000000.0) Hz.
pub const ATOMIC_MASS_UNIT_HERTZ_RELATIONSHIP: PhysicalConstant = PhysicalConstant::new(
    "atomic mass unit-hertz relationship",
    2.2523427369e+23,
    320000000000000.0,
    "Hz",
);

/// atomic mass unit-inverse meter relationship = (751300667100000.0 ± 1100000.0) m^-1.
pub const ATOMIC_MASS_UNIT_INVERSE_METER_RELATIONSHIP: PhysicalConstant = PhysicalConstant::new(
    "atomic mass unit-inverse meter relationship",
    751300667100000.0,
    1100000.0,
    "m^-1",
);

/// atomic mass unit-joule relationship = (1.49241783e-10 ± 7.4e-18) J.
pub const ATOMIC_MASS_UNIT_JOULE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("atomic mass unit-joule relationship", 1.49241783e-10, 7.4e-18, "J");

/// atomic mass unit-kelvin relationship = (10809527000000.0 ± 19000000.0) K.
pub const ATOMIC_MASS_UNIT_KELVIN_RELATIONSHIP: PhysicalConstant = PhysicalConstant::new(
    "atomic mass unit-kelvin relationship",
    10809527000000.0,
    19000000.0,
    "K",
);

/// atomic mass unit-kilogram relationship = (1.660538782e-27 ± 8.3e-35) kg.
pub const ATOMIC_MASS_UNIT_KILOGRAM_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("atomic mass unit-kilogram relationship", 1.660538782e-27, 8.3e-35, "kg");

/// atomic unit of 1st hyperpolarizability = (3.206361533e-53 ± 8.1e-61) C^3 m^3 J^-2.
pub const ATOMIC_UNIT_OF_1ST_HYPERPOLARIZABILITY: PhysicalConstant = PhysicalConstant::new(
    "atomic unit of 1st hyperpolarizability",
    3.206361533e-53,
    8.1e-61,
    "C^3 m^3 J^-2",
);

/// atomic unit of 2nd hyperpolarizability = (6.23538095e-65 ± 3.1e-72) C^4 m^4 J^-3.
pub const ATOMIC_UNIT_OF_2ND_HYPERPOLARIZABILITY: PhysicalConstant = PhysicalConstant::new(
    "atomic unit of 2nd hyperpolarizability",
    6.23538095e-65,
    3.1e-72,
    "C^4 m^4 J^-3",
);

/// atomic unit of action = (1.054571628e-34 ± 5.3e-42) J s.
pub const ATOMIC_UNIT_OF_ACTION: PhysicalConstant =
    PhysicalConstant::new("atomic unit of action", 1.054571628e-34, 5.3e-42, "J s");

/// atomic unit of charge = (1.602176487e-19 ± 4e-27) C.
pub const ATOMIC_UNIT_OF_CHARGE: PhysicalConstant =
    PhysicalConstant::new("atomic unit of charge", 1.602176487e-19, 4e-27, "C");

/// atomic unit of charge density = (1081202300000.0 ± 27000.0) C m^-3.
pub const ATOMIC_UNIT_OF_CHARGE_DENSITY: PhysicalConstant =
    PhysicalConstant::new("atomic unit of charge density", 1081202300000.0, 27000.0, "C m^-3");

/// atomic unit of current = (0.00662361763 ± 1.7e-10) A.
pub const ATOMIC_UNIT_OF_CURRENT: PhysicalConstant =
    PhysicalConstant::new("atomic unit of current", 0.00662361763, 1.7e-10, "A");

/// atomic unit of electric dipole mom. = (8.47835281e-30 ± 2.1e-37) C m.
pub const ATOMIC_UNIT_OF_ELECTRIC_DIPOLE_MOM: PhysicalConstant =
    PhysicalConstant::new("atomic unit of electric dipole mom.", 8.47835281e-30, 2.1e-37, "C m");

/// atomic unit of electric field = (514220632000.0 ± 13000.0) V m^-1.
pub const ATOMIC_UNIT_OF_ELECTRIC_FIELD: PhysicalConstant =
    PhysicalConstant::new("atomic unit of electric field", 514220632000.0, 13000.0, "V m^-1");

/// atomic unit of electric field gradient = (9.71736166e+21 ± 240000000000000.0) V m^-2.
pub const ATOMIC_UNIT_OF_ELECTRIC_FIELD_GRADIENT: PhysicalConstant = PhysicalConstant::new(
    "atomic unit of electric field gradient",
    9.71736166e+21,
    240000000000000.0,
    "V m^-2",
);

/// atomic unit of electric polarizability = (1.6487772536e-41 ± 3.4e-50) C^2 m^2 J^-1.
pub const ATOMIC_UNIT_OF_ELECTRIC_POLARIZABILITY: PhysicalConstant = PhysicalConstant::new(
    "atomic unit of electric polarizability",
    1.6487772536e-41,
    3.4e-50,
    "C^2 m^2 J^-1",
);

/// atomic unit of electric potential = (27.21138386 ± 6.8e-07) V.
pub const ATOMIC_UNIT_OF_ELECTRIC_POTENTIAL: PhysicalConstant =
    PhysicalConstant::new("atomic unit of electric potential", 27.21138386, 6.8e-07, "V");

/// atomic unit of electric quadrupole mom. = (4.48655107e-40 ± 1.1e-47) C m^2.
pub const ATOMIC_UNIT_OF_ELECTRIC_QUADRUPOLE_MOM: PhysicalConstant = PhysicalConstant::new(
    "atomic unit of electric quadrupole mom.",
    4.48655107e-40,
    1.1e-47,
    "C m^2",
);

/// atomic unit of energy = (4.35974394e-18 ± 2.2e-25) J.
pub const ATOMIC_UNIT_OF_ENERGY: PhysicalConstant =
    PhysicalConstant::new("atomic unit of energy", 4.35974394e-18, 2.2e-25, "J");

/// atomic unit of force = (8.23872206e-08 ± 4.1e-15) N.
pub const ATOMIC_UNIT_OF_FORCE: PhysicalConstant =
    PhysicalConstant::new("atomic unit of force", 8.23872206e-08, 4.1e-15, "N");

/// atomic unit of length = (5.2917720859e-11 ± 3.6e-20) m.
pub const ATOMIC_UNIT_OF_LENGTH: PhysicalConstant =
    PhysicalConstant::new("atomic unit of length", 5.2917720859e-11, 3.6e-20, "m");

/// atomic unit of mag. dipole mom. = (1.85480183e-23 ± 4.6e-31) J T^-1.
pub const ATOMIC_UNIT_OF_MAG_DIPOLE_MOM: PhysicalConstant =
    PhysicalConstant::new("atomic unit of mag. dipole mom.", 1.85480183e-23, 4.6e-31, "J T^-1");

/// atomic unit of mag. flux density = (235051.7382 ± 0.0059) T.
pub const ATOMIC_UNIT_OF_MAG_FLUX_DENSITY: PhysicalConstant =
    PhysicalConstant::new("atomic unit of mag. flux density", 235051.7382, 0.0059, "T");

/// atomic unit of magnetizability = (7.891036433e-29 ± 2.7e-37) J T^-2.
pub const ATOMIC_UNIT_OF_MAGNETIZABILITY: PhysicalConstant =
    PhysicalConstant::new("atomic unit of magnetizability", 7.891036433e-29, 2.7e-37, "J T^-2");

/// atomic unit of mass = (9.10938215e-31 ± 4.5e-38) kg.
pub const ATOMIC_UNIT_OF_MASS: PhysicalConstant =
    PhysicalConstant::new("atomic unit of mass", 9.10938215e-31, 4.5e-38, "kg");

/// atomic unit of momentum = (1.992851565e-24 ± 9.9e-32) kg m s^-1.
pub const ATOMIC_UNIT_OF_MOMENTUM: PhysicalConstant =
    PhysicalConstant::new("atomic unit of momentum", 1.992851565e-24, 9.9e-32, "kg m s^-1");

/// atomic unit of permittivity = (1.112650056e-10 ± 0.0) F m^-1.
pub const ATOMIC_UNIT_OF_PERMITTIVITY: PhysicalConstant =
    PhysicalConstant::new("atomic unit of permittivity", 1.112650056e-10, 0.0, "F m^-1");

/// atomic unit of time = (2.418884326505e-17 ± 1.6e-12) 7 s.
pub const ATOMIC_UNIT_OF_TIME: PhysicalConstant =
    PhysicalConstant::new("atomic unit of time", 2.418884326505e-17, 1.6e-12, "7 s");

/// atomic unit of velocity = (2187691.2541 ± 0.0015) m s^-1.
pub const ATOMIC_UNIT_OF_VELOCITY: PhysicalConstant =
    PhysicalConstant::new("atomic unit of velocity", 2187691.2541, 0.0015, "m s^-1");

/// Avogadro constant = (6.02214179e+23 ± 3e+16) mol^-1.
pub const AVOGADRO_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("Avogadro constant", 6.02214179e+23, 3e+16, "mol^-1");

/// Bohr magneton = (9.27400915e-24 ± 2.3e-31) J T^-1.
pub const BOHR_MAGNETON: PhysicalConstant =
    PhysicalConstant::new("Bohr magneton", 9.27400915e-24, 2.3e-31, "J T^-1");

/// Bohr magneton in eV/T = (5.7883817555e-05 ± 7.9e-14) eV T^-1.
pub const BOHR_MAGNETON_IN_EV_T: PhysicalConstant =
    PhysicalConstant::new("Bohr magneton in eV/T", 5.7883817555e-05, 7.9e-14, "eV T^-1");

/// Bohr magneton in Hz/T = (13996246040.0 ± 350.0) Hz T^-1.
pub const BOHR_MAGNETON_IN_HZ_T: PhysicalConstant =
    PhysicalConstant::new("Bohr magneton in Hz/T", 13996246040.0, 350.0, "Hz T^-1");

/// Bohr magneton in inverse meters per tesla = (46.6864515 ± 1.2e-06) m^-1 T^-1.
pub const BOHR_MAGNETON_IN_INVERSE_METERS_PER_TESLA: PhysicalConstant = PhysicalConstant::new(
    "Bohr magneton in inverse meters per tesla",
    46.6864515,
    1.2e-06,
    "m^-1 T^-1",
);

/// Bohr magneton in K/T = (0.6717131 ± 1.2e-06) K T^-1.
pub const BOHR_MAGNETON_IN_K_T: PhysicalConstant =
    PhysicalConstant::new("Bohr magneton in K/T", 0.6717131, 1.2e-06, "K T^-1");

/// Bohr radius = (5.2917720859e-11 ± 3.6e-20) m.
pub const BOHR_RADIUS: PhysicalConstant =
    PhysicalConstant::new("Bohr radius", 5.2917720859e-11, 3.6e-20, "m");

/// Boltzmann constant = (1.3806504e-23 ± 2.4e-29) J K^-1.
pub const BOLTZMANN_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("Boltzmann constant", 1.3806504e-23, 2.4e-29, "J K^-1");

/// Boltzmann constant in eV/K = (8.617343e-05 ± 1.5e-10) eV K^-1.
pub const BOLTZMANN_CONSTANT_IN_EV_K: PhysicalConstant =
    PhysicalConstant::new("Boltzmann constant in eV/K", 8.617343e-05, 1.5e-10, "eV K^-1");

/// Boltzmann constant in Hz/K = (20836644000.0 ± 36000.0) Hz K^-1.
pub const BOLTZMANN_CONSTANT_IN_HZ_K: PhysicalConstant =
    PhysicalConstant::new("Boltzmann constant in Hz/K", 20836644000.0, 36000.0, "Hz K^-1");

/// Boltzmann constant in inverse meters per kelvin = (69.50356 ± 0.00012) m^-1 K^-1.
pub const BOLTZMANN_CONSTANT_IN_INVERSE_METERS_PER_KELVIN: PhysicalConstant = PhysicalConstant::new(
    "Boltzmann constant in inverse meters per kelvin",
    69.50356,
    0.00012,
    "m^-1 K^-1",
);

/// characteristic impedance of vacuum = (376.730313461 ± 0.0) ohm.
pub const CHARACTERISTIC_IMPEDANCE_OF_VACUUM: PhysicalConstant =
    PhysicalConstant::new("characteristic impedance of vacuum", 376.730313461, 0.0, "ohm");

/// classical electron radius = (2.8179402894e-15 ± 5.8e-24) m.
pub const CLASSICAL_ELECTRON_RADIUS: PhysicalConstant =
    PhysicalConstant::new("classical electron radius", 2.8179402894e-15, 5.8e-24, "m");

/// Compton wavelength = (2.4263102175e-12 ± 3.3e-21) m.
pub const COMPTON_WAVELENGTH: PhysicalConstant =
    PhysicalConstant::new("Compton wavelength", 2.4263102175e-12, 3.3e-21, "m");

/// Compton wavelength over 2 pi = (3.8615926459e-13 ± 5.3e-22) m.
pub const COMPTON_WAVELENGTH_OVER_2_PI: PhysicalConstant =
    PhysicalConstant::new("Compton wavelength over 2 pi", 3.8615926459e-13, 5.3e-22, "m");

/// conductance quantum = (7.7480917004e-05 ± 5.3e-14) S.
pub const CONDUCTANCE_QUANTUM: PhysicalConstant =
    PhysicalConstant::new("conductance quantum", 7.7480917004e-05, 5.3e-14, "S");

/// conventional value of Josephson constant = (483597900000000.0 ± 0.0) Hz V^-1.
pub const CONVENTIONAL_VALUE_OF_JOSEPHSON_CONSTANT: PhysicalConstant = PhysicalConstant::new(
    "conventional value of Josephson constant",
    483597900000000.0,
    0.0,
    "Hz V^-1",
);

/// conventional value of von Klitzing constant = (25812.807 ± 0.0) ohm.
pub const CONVENTIONAL_VALUE_OF_VON_KLITZING_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("conventional value of von Klitzing constant", 25812.807, 0.0, "ohm");

/// Cu x unit = (1.00207699e-13 ± 2.8e-20) m.
pub const CU_X_UNIT: PhysicalConstant =
    PhysicalConstant::new("Cu x unit", 1.00207699e-13, 2.8e-20, "m");

/// deuteron-electron mag. mom. ratio = (-0.0004664345537 ± 3.9e-12).
pub const DEUTERON_ELECTRON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("deuteron-electron mag. mom. ratio", -0.0004664345537, 3.9e-12, "");

/// deuteron-electron mass ratio = (3670.4829654 ± 1.6e-06).
pub const DEUTERON_ELECTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("deuteron-electron mass ratio", 3670.4829654, 1.6e-06, "");

/// deuteron g factor = (0.8574382308 ± 7.2e-09).
pub const DEUTERON_G_FACTOR: PhysicalConstant =
    PhysicalConstant::new("deuteron g factor", 0.8574382308, 7.2e-09, "");

/// deuteron mag. mom. = (4.33073465e-27 ± 1.1e-34) J T^-1.
pub const DEUTERON_MAG_MOM: PhysicalConstant =
    PhysicalConstant::new("deuteron mag. mom.", 4.33073465e-27, 1.1e-34, "J T^-1");

/// deuteron mag. mom. to Bohr magneton ratio = (0.0004669754556 ± 3.9e-12).
pub const DEUTERON_MAG_MOM_TO_BOHR_MAGNETON_RATIO: PhysicalConstant = PhysicalConstant::new(
    "deuteron mag. mom. to Bohr magneton ratio",
    0.0004669754556,
    3.9e-12,
    "",
);

/// deuteron mag. mom. to nuclear magneton ratio = (0.8574382308 ± 7.2e-09).
pub const DEUTERON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO: PhysicalConstant = PhysicalConstant::new(
    "deuteron mag. mom. to nuclear magneton ratio",
    0.8574382308,
    7.2e-09,
    "",
);

/// deuteron mass = (3.3435832e-27 ± 1.7e-34) kg.
pub const DEUTERON_MASS: PhysicalConstant =
    PhysicalConstant::new("deuteron mass", 3.3435832e-27, 1.7e-34, "kg");

/// deuteron mass energy equivalent = (3.00506272e-10 ± 1.5e-17) J.
pub const DEUTERON_MASS_ENERGY_EQUIVALENT: PhysicalConstant =
    PhysicalConstant::new("deuteron mass energy equivalent", 3.00506272e-10, 1.5e-17, "J");

/// deuteron mass energy equivalent in MeV = (1875.612793 ± 4.7e-05) MeV.
pub const DEUTERON_MASS_ENERGY_EQUIVALENT_IN_MEV: PhysicalConstant =
    PhysicalConstant::new("deuteron mass energy equivalent in MeV", 1875.612793, 4.7e-05, "MeV");

/// deuteron mass in u = (2.013553212724 ± 7.8e-11) u.
pub const DEUTERON_MASS_IN_U: PhysicalConstant =
    PhysicalConstant::new("deuteron mass in u", 2.013553212724, 7.8e-11, "u");

/// deuteron molar mass = (0.002013553212724 ± 7.8e-14) kg mol^-1.
pub const DEUTERON_MOLAR_MASS: PhysicalConstant =
    PhysicalConstant::new("deuteron molar mass", 0.002013553212724, 7.8e-14, "kg mol^-1");

/// deuteron-neutron mag. mom. ratio = (-0.44820652 ± 1.1e-07).
pub const DEUTERON_NEUTRON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("deuteron-neutron mag. mom. ratio", -0.44820652, 1.1e-07, "");

/// deuteron-proton mag. mom. ratio = (0.307012207 ± 2.4e-09).
pub const DEUTERON_PROTON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("deuteron-proton mag. mom. ratio", 0.307012207, 2.4e-09, "");

/// deuteron-proton mass ratio = (1.99900750108 ± 2.2e-10).
pub const DEUTERON_PROTON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("deuteron-proton mass ratio", 1.99900750108, 2.2e-10, "");

/// deuteron rms charge radius = (2.1402e-15 ± 2.8e-18) m.
pub const DEUTERON_RMS_CHARGE_RADIUS: PhysicalConstant =
    PhysicalConstant::new("deuteron rms charge radius", 2.1402e-15, 2.8e-18, "m");

/// electric constant = (8.854187817e-12 ± 0.0) F m^-1.
pub const ELECTRIC_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("electric constant", 8.854187817e-12, 0.0, "F m^-1");

/// electron charge to mass quotient = (-175882015000.0 ± 4400.0) C kg^-1.
pub const ELECTRON_CHARGE_TO_MASS_QUOTIENT: PhysicalConstant =
    PhysicalConstant::new("electron charge to mass quotient", -175882015000.0, 4400.0, "C kg^-1");

/// electron-deuteron mag. mom. ratio = (-2143.923498 ± 1.8e-05).
pub const ELECTRON_DEUTERON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron-deuteron mag. mom. ratio", -2143.923498, 1.8e-05, "");

/// electron-deuteron mass ratio = (0.00027244371093 ± 1.2e-13).
pub const ELECTRON_DEUTERON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron-deuteron mass ratio", 0.00027244371093, 1.2e-13, "");

/// electron g factor = (-2.0023193043622 ± 1.5e-12).
pub const ELECTRON_G_FACTOR: PhysicalConstant =
    PhysicalConstant::new("electron g factor", -2.0023193043622, 1.5e-12, "");

/// electron gyromag. ratio = (176085977000.0 ± 4400.0) s^-1 T^-1.
pub const ELECTRON_GYROMAG_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron gyromag. ratio", 176085977000.0, 4400.0, "s^-1 T^-1");

/// electron gyromag. ratio over 2 pi = (28024.95364 ± 0.0007) MHz T^-1.
pub const ELECTRON_GYROMAG_RATIO_OVER_2_PI: PhysicalConstant =
    PhysicalConstant::new("electron gyromag. ratio over 2 pi", 28024.95364, 0.0007, "MHz T^-1");

/// electron mag. mom. = (-9.28476377e-24 ± 2.3e-31) J T^-1.
pub const ELECTRON_MAG_MOM: PhysicalConstant =
    PhysicalConstant::new("electron mag. mom.", -9.28476377e-24, 2.3e-31, "J T^-1");

/// electron mag. mom. anomaly = (0.00115965218111 ± 7.4e-13).
pub const ELECTRON_MAG_MOM_ANOMALY: PhysicalConstant =
    PhysicalConstant::new("electron mag. mom. anomaly", 0.00115965218111, 7.4e-13, "");

/// electron mag. mom. to Bohr magneton ratio = (-1.00115965218111 ± 7.4e-13).
pub const ELECTRON_MAG_MOM_TO_BOHR_MAGNETON_RATIO: PhysicalConstant = PhysicalConstant::new(
    "electron mag. mom. to Bohr magneton ratio",
    -1.00115965218111,
    7.4e-13,
    "",
);

/// electron mag. mom. to nuclear magneton ratio = (-1838.28197092 ± 8e-07).
pub const ELECTRON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO: PhysicalConstant = PhysicalConstant::new(
    "electron mag. mom. to nuclear magneton ratio",
    -1838.28197092,
    8e-07,
    "",
);

/// electron mass = (9.10938215e-31 ± 4.5e-38) kg.
pub const ELECTRON_MASS: PhysicalConstant =
    PhysicalConstant::new("electron mass", 9.10938215e-31, 4.5e-38, "kg");

/// electron mass energy equivalent = (8.18710438e-14 ± 4.1e-21) J.
pub const ELECTRON_MASS_ENERGY_EQUIVALENT: PhysicalConstant =
    PhysicalConstant::new("electron mass energy equivalent", 8.18710438e-14, 4.1e-21, "J");

/// electron mass energy equivalent in MeV = (0.51099891 ± 1.3e-08) MeV.
pub const ELECTRON_MASS_ENERGY_EQUIVALENT_IN_MEV: PhysicalConstant =
    PhysicalConstant::new("electron mass energy equivalent in MeV", 0.51099891, 1.3e-08, "MeV");

/// electron mass in u = (0.00054857990943 ± 2.3e-13) u.
pub const ELECTRON_MASS_IN_U: PhysicalConstant =
    PhysicalConstant::new("electron mass in u", 0.00054857990943, 2.3e-13, "u");

/// electron molar mass = (5.4857990943e-07 ± 2.3e-16) kg mol^-1.
pub const ELECTRON_MOLAR_MASS: PhysicalConstant =
    PhysicalConstant::new("electron molar mass", 5.4857990943e-07, 2.3e-16, "kg mol^-1");

/// electron-muon mag. mom. ratio = (206.7669877 ± 5.2e-06).
pub const ELECTRON_MUON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron-muon mag. mom. ratio", 206.7669877, 5.2e-06, "");

/// electron-muon mass ratio = (0.00483633171 ± 1.2e-10).
pub const ELECTRON_MUON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron-muon mass ratio", 0.00483633171, 1.2e-10, "");

/// electron-neutron mag. mom. ratio = (960.9205 ± 0.00023).
pub const ELECTRON_NEUTRON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron-neutron mag. mom. ratio", 960.9205, 0.00023, "");

/// electron-neutron mass ratio = (0.00054386734459 ± 3.3e-13).
pub const ELECTRON_NEUTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron-neutron mass ratio", 0.00054386734459, 3.3e-13, "");

/// electron-proton mag. mom. ratio = (-658.2106848 ± 5.4e-06).
pub const ELECTRON_PROTON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron-proton mag. mom. ratio", -658.2106848, 5.4e-06, "");

/// electron-proton mass ratio = (0.00054461702177 ± 2.4e-13).
pub const ELECTRON_PROTON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron-proton mass ratio", 0.00054461702177, 2.4e-13, "");

/// electron-tau mass ratio = (0.000287564 ± 4.7e-08).
pub const ELECTRON_TAU_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron-tau mass ratio", 0.000287564, 4.7e-08, "");

/// electron to alpha particle mass ratio = (0.00013709335557 ± 5.8e-14).
pub const ELECTRON_TO_ALPHA_PARTICLE_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron to alpha particle mass ratio", 0.00013709335557, 5.8e-14, "");

/// electron to shielded helion mag. mom. ratio = (864.058257 ± 1e-05).
pub const ELECTRON_TO_SHIELDED_HELION_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron to shielded helion mag. mom. ratio", 864.058257, 1e-05, "");

/// electron to shielded proton mag. mom. ratio = (-658.2275971 ± 7.2e-06).
pub const ELECTRON_TO_SHIELDED_PROTON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("electron to shielded proton mag. mom. ratio", -658.2275971, 7.2e-06, "");

/// electron volt = (1.602176487e-19 ± 4e-27) J.
pub const ELECTRON_VOLT: PhysicalConstant =
    PhysicalConstant::new("electron volt", 1.602176487e-19, 4e-27, "J");

/// electron volt-atomic mass unit relationship = (1.073544188e-09 ± 2.7e-17) u.
pub const ELECTRON_VOLT_ATOMIC_MASS_UNIT_RELATIONSHIP: PhysicalConstant = PhysicalConstant::new(
    "electron volt-atomic mass unit relationship",
    1.073544188e-09,
    2.7e-17,
    "u",
);

/// electron volt-hartree relationship = (0.0367493254 ± 9.2e-10) E_h.
pub const ELECTRON_VOLT_HARTREE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("electron volt-hartree relationship", 0.0367493254, 9.2e-10, "E_h");

/// electron volt-hertz relationship = (241798945400000.0 ± 6000000.0) Hz.
pub const ELECTRON_VOLT_HERTZ_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("electron volt-hertz relationship", 241798945400000.0, 6000000.0, "Hz");

/// electron volt-inverse meter relationship = (806554.465 ± 0.02) m^-1.
pub const ELECTRON_VOLT_INVERSE_METER_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("electron volt-inverse meter relationship", 806554.465, 0.02, "m^-1");

/// electron volt-joule relationship = (1.602176487e-19 ± 4e-27) J.
pub const ELECTRON_VOLT_JOULE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("electron volt-joule relationship", 1.602176487e-19, 4e-27, "J");

/// electron volt-kelvin relationship = (11604.505 ± 0.02) K.
pub const ELECTRON_VOLT_KELVIN_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("electron volt-kelvin relationship", 11604.505, 0.02, "K");

/// electron volt-kilogram relationship = (1.782661758e-36 ± 4.4e-44) kg.
pub const ELECTRON_VOLT_KILOGRAM_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("electron volt-kilogram relationship", 1.782661758e-36, 4.4e-44, "kg");

/// elementary charge = (1.602176487e-19 ± 4e-27) C.
pub const ELEMENTARY_CHARGE: PhysicalConstant =
    PhysicalConstant::new("elementary charge", 1.602176487e-19, 4e-27, "C");

/// elementary charge over h = (241798945400000.0 ± 6000000.0) A J^-1.
pub const ELEMENTARY_CHARGE_OVER_H: PhysicalConstant =
    PhysicalConstant::new("elementary charge over h", 241798945400000.0, 6000000.0, "A J^-1");

/// Faraday constant = (96485.3399 ± 0.0024) C mol^-1.
pub const FARADAY_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("Faraday constant", 96485.3399, 0.0024, "C mol^-1");

/// Faraday constant for conventional electric current = (96485.3401 ± 0.0048) C_90 mol^-1.
pub const FARADAY_CONSTANT_FOR_CONVENTIONAL_ELECTRIC_CURRENT: PhysicalConstant =
    PhysicalConstant::new(
        "Faraday constant for conventional electric current",
        96485.3401,
        0.0048,
        "C_90 mol^-1",
    );

/// Fermi coupling constant = (1.16637e-05 ± 1e-10) GeV^-2.
pub const FERMI_COUPLING_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("Fermi coupling constant", 1.16637e-05, 1e-10, "GeV^-2");

/// fine-structure constant = (0.0072973525376 ± 5e-12).
pub const FINE_STRUCTURE_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("fine-structure constant", 0.0072973525376, 5e-12, "");

/// first radiation constant = (3.74177118e-16 ± 1.9e-23) W m^2.
pub const FIRST_RADIATION_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("first radiation constant", 3.74177118e-16, 1.9e-23, "W m^2");

/// first radiation constant for spectral radiance = (1.191042759e-16 ± 5.9e-24) W m^2 sr^-1.
pub const FIRST_RADIATION_CONSTANT_FOR_SPECTRAL_RADIANCE: PhysicalConstant = PhysicalConstant::new(
    "first radiation constant for spectral radiance",
    1.191042759e-16,
    5.9e-24,
    "W m^2 sr^-1",
);

/// hartree-atomic mass unit relationship = (2.9212622986e-08 ± 4.2e-17) u.
pub const HARTREE_ATOMIC_MASS_UNIT_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hartree-atomic mass unit relationship", 2.9212622986e-08, 4.2e-17, "u");

/// hartree-electron volt relationship = (27.21138386 ± 6.8e-07) eV.
pub const HARTREE_ELECTRON_VOLT_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hartree-electron volt relationship", 27.21138386, 6.8e-07, "eV");

/// Hartree energy = (4.35974394e-18 ± 2.2e-25) J.
pub const HARTREE_ENERGY: PhysicalConstant =
    PhysicalConstant::new("Hartree energy", 4.35974394e-18, 2.2e-25, "J");

/// Hartree energy in eV = (27.21138386 ± 6.8e-07) eV.
pub const HARTREE_ENERGY_IN_EV: PhysicalConstant =
    PhysicalConstant::new("Hartree energy in eV", 27.21138386, 6.8e-07, "eV");

/// hartree-hertz relationship = (6579683920722000.0 ± 44000.0) Hz.
pub const HARTREE_HERTZ_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hartree-hertz relationship", 6579683920722000.0, 44000.0, "Hz");

/// hartree-inverse meter relationship = (21947463.13705 ± 0.00015) m^-1.
pub const HARTREE_INVERSE_METER_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hartree-inverse meter relationship", 21947463.13705, 0.00015, "m^-1");

/// hartree-joule relationship = (4.35974394e-18 ± 2.2e-25) J.
pub const HARTREE_JOULE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hartree-joule relationship", 4.35974394e-18, 2.2e-25, "J");

/// hartree-kelvin relationship = (315774.65 ± 0.55) K.
pub const HARTREE_KELVIN_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hartree-kelvin relationship", 315774.65, 0.55, "K");

/// hartree-kilogram relationship = (4.85086934e-35 ± 2.4e-42) kg.
pub const HARTREE_KILOGRAM_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hartree-kilogram relationship", 4.85086934e-35, 2.4e-42, "kg");

/// helion-electron mass ratio = (5495.8852765 ± 5.2e-06).
pub const HELION_ELECTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("helion-electron mass ratio", 5495.8852765, 5.2e-06, "");

/// helion mass = (5.00641192e-27 ± 2.5e-34) kg.
pub const HELION_MASS: PhysicalConstant =
    PhysicalConstant::new("helion mass", 5.00641192e-27, 2.5e-34, "kg");

/// helion mass energy equivalent = (4.49953864e-10 ± 2.2e-17) J.
pub const HELION_MASS_ENERGY_EQUIVALENT: PhysicalConstant =
    PhysicalConstant::new("helion mass energy equivalent", 4.49953864e-10, 2.2e-17, "J");

/// helion mass energy equivalent in MeV = (2808.391383 ± 7e-05) MeV.
pub const HELION_MASS_ENERGY_EQUIVALENT_IN_MEV: PhysicalConstant =
    PhysicalConstant::new("helion mass energy equivalent in MeV", 2808.391383, 7e-05, "MeV");

/// helion mass in u = (3.0149322473 ± 2.6e-09) u.
pub const HELION_MASS_IN_U: PhysicalConstant =
    PhysicalConstant::new("helion mass in u", 3.0149322473, 2.6e-09, "u");

/// helion molar mass = (0.0030149322473 ± 2.6e-12) kg mol^-1.
pub const HELION_MOLAR_MASS: PhysicalConstant =
    PhysicalConstant::new("helion molar mass", 0.0030149322473, 2.6e-12, "kg mol^-1");

/// helion-proton mass ratio = (2.9931526713 ± 2.6e-09).
pub const HELION_PROTON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("helion-proton mass ratio", 2.9931526713, 2.6e-09, "");

/// hertz-atomic mass unit relationship = (4.4398216294e-24 ± 6.4e-33) u.
pub const HERTZ_ATOMIC_MASS_UNIT_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hertz-atomic mass unit relationship", 4.4398216294e-24, 6.4e-33, "u");

/// hertz-electron volt relationship = (4.13566733e-15 ± 1e-22) eV.
pub const HERTZ_ELECTRON_VOLT_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hertz-electron volt relationship", 4.13566733e-15, 1e-22, "eV");

/// hertz-hartree relationship = (1.519829846006e-16 ± 1e-27) E_h.
pub const HERTZ_HARTREE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hertz-hartree relationship", 1.519829846006e-16, 1e-27, "E_h");

/// hertz-inverse meter relationship = (3.335640951e-09 ± 0.0) m^-1.
pub const HERTZ_INVERSE_METER_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hertz-inverse meter relationship", 3.335640951e-09, 0.0, "m^-1");

/// hertz-joule relationship = (6.62606896e-34 ± 3.3e-41) J.
pub const HERTZ_JOULE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hertz-joule relationship", 6.62606896e-34, 3.3e-41, "J");

/// hertz-kelvin relationship = (4.7992374e-11 ± 8.4e-17) K.
pub const HERTZ_KELVIN_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hertz-kelvin relationship", 4.7992374e-11, 8.4e-17, "K");

/// hertz-kilogram relationship = (7.372496e-51 ± 3.7e-58) kg.
pub const HERTZ_KILOGRAM_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("hertz-kilogram relationship", 7.372496e-51, 3.7e-58, "kg");

/// inverse fine-structure constant = (137.035999679 ± 9.4e-08).
pub const INVERSE_FINE_STRUCTURE_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("inverse fine-structure constant", 137.035999679, 9.4e-08, "");

/// inverse meter-atomic mass unit relationship = (1.3310250394e-15 ± 1.9e-24) u.
pub const INVERSE_METER_ATOMIC_MASS_UNIT_RELATIONSHIP: PhysicalConstant = PhysicalConstant::new(
    "inverse meter-atomic mass unit relationship",
    1.3310250394e-15,
    1.9e-24,
    "u",
);

/// inverse meter-electron volt relationship = (1.239841875e-06 ± 3.1e-14) eV.
pub const INVERSE_METER_ELECTRON_VOLT_RELATIONSHIP: PhysicalConstant = PhysicalConstant::new(
    "inverse meter-electron volt relationship",
    1.239841875e-06,
    3.1e-14,
    "eV",
);

/// inverse meter-hartree relationship = (4.55633525276e-08 ± 3e-19) E_h.
pub const INVERSE_METER_HARTREE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("inverse meter-hartree relationship", 4.55633525276e-08, 3e-19, "E_h");

/// inverse meter-hertz relationship = (299792458.0 ± 0.0) Hz.
pub const INVERSE_METER_HERTZ_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("inverse meter-hertz relationship", 299792458.0, 0.0, "Hz");

/// inverse meter-joule relationship = (1.986445501e-25 ± 9.9e-33) J.
pub const INVERSE_METER_JOULE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("inverse meter-joule relationship", 1.986445501e-25, 9.9e-33, "J");

/// inverse meter-kelvin relationship = (0.014387752 ± 2.5e-08) K.
pub const INVERSE_METER_KELVIN_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("inverse meter-kelvin relationship", 0.014387752, 2.5e-08, "K");

/// inverse meter-kilogram relationship = (2.2102187e-42 ± 1.1e-49) kg.
pub const INVERSE_METER_KILOGRAM_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("inverse meter-kilogram relationship", 2.2102187e-42, 1.1e-49, "kg");

/// inverse of conductance quantum = (12906.4037787 ± 8.8e-06) ohm.
pub const INVERSE_OF_CONDUCTANCE_QUANTUM: PhysicalConstant =
    PhysicalConstant::new("inverse of conductance quantum", 12906.4037787, 8.8e-06, "ohm");

/// Josephson constant = (483597891000000.0 ± 12000000.0) Hz V^-1.
pub const JOSEPHSON_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("Josephson constant", 483597891000000.0, 12000000.0, "Hz V^-1");

/// joule-atomic mass unit relationship = (6700536410.0 ± 330.0) u.
pub const JOULE_ATOMIC_MASS_UNIT_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("joule-atomic mass unit relationship", 6700536410.0, 330.0, "u");

/// joule-electron volt relationship = (6.24150965e+18 ± 160000000000.0) eV.
pub const JOULE_ELECTRON_VOLT_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("joule-electron volt relationship", 6.24150965e+18, 160000000000.0, "eV");

/// joule-hartree relationship = (2.29371269e+17 ± 11000000000.0) E_h.
pub const JOULE_HARTREE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("joule-hartree relationship", 2.29371269e+17, 11000000000.0, "E_h");

/// joule-hertz relationship = (1.50919045e+33 ± 7.5e+25) Hz.
pub const JOULE_HERTZ_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("joule-hertz relationship", 1.50919045e+33, 7.5e+25, "Hz");

/// joule-inverse meter relationship = (5.03411747e+24 ± 2.5e+17) m^-1.
pub const JOULE_INVERSE_METER_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("joule-inverse meter relationship", 5.03411747e+24, 2.5e+17, "m^-1");

/// joule-kelvin relationship = (7.242963e+22 ± 1.3e+17) K.
pub const JOULE_KELVIN_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("joule-kelvin relationship", 7.242963e+22, 1.3e+17, "K");

/// joule-kilogram relationship = (1.112650056e-17 ± 0.0) kg.
pub const JOULE_KILOGRAM_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("joule-kilogram relationship", 1.112650056e-17, 0.0, "kg");

/// kelvin-atomic mass unit relationship = (9.251098e-14 ± 1.6e-19) u.
pub const KELVIN_ATOMIC_MASS_UNIT_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kelvin-atomic mass unit relationship", 9.251098e-14, 1.6e-19, "u");

/// kelvin-electron volt relationship = (8.617343e-05 ± 1.5e-10) eV.
pub const KELVIN_ELECTRON_VOLT_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kelvin-electron volt relationship", 8.617343e-05, 1.5e-10, "eV");

/// kelvin-hartree relationship = (3.1668153e-06 ± 5.5e-12) E_h.
pub const KELVIN_HARTREE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kelvin-hartree relationship", 3.1668153e-06, 5.5e-12, "E_h");

/// kelvin-hertz relationship = (20836644000.0 ± 36000.0) Hz.
pub const KELVIN_HERTZ_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kelvin-hertz relationship", 20836644000.0, 36000.0, "Hz");

/// kelvin-inverse meter relationship = (69.50356 ± 0.00012) m^-1.
pub const KELVIN_INVERSE_METER_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kelvin-inverse meter relationship", 69.50356, 0.00012, "m^-1");

/// kelvin-joule relationship = (1.3806504e-23 ± 2.4e-29) J.
pub const KELVIN_JOULE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kelvin-joule relationship", 1.3806504e-23, 2.4e-29, "J");

/// kelvin-kilogram relationship = (1.5361807e-40 ± 2.7e-46) kg.
pub const KELVIN_KILOGRAM_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kelvin-kilogram relationship", 1.5361807e-40, 2.7e-46, "kg");

/// kilogram-atomic mass unit relationship = (6.02214179e+26 ± 3e+19) u.
pub const KILOGRAM_ATOMIC_MASS_UNIT_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kilogram-atomic mass unit relationship", 6.02214179e+26, 3e+19, "u");

/// kilogram-electron volt relationship = (5.60958912e+35 ± 1.4e+28) eV.
pub const KILOGRAM_ELECTRON_VOLT_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kilogram-electron volt relationship", 5.60958912e+35, 1.4e+28, "eV");

/// kilogram-hartree relationship = (2.06148616e+34 ± 1e+27) E_h.
pub const KILOGRAM_HARTREE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kilogram-hartree relationship", 2.06148616e+34, 1e+27, "E_h");

/// kilogram-hertz relationship = (1.356392733e+50 ± 6.8e+42) Hz.
pub const KILOGRAM_HERTZ_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kilogram-hertz relationship", 1.356392733e+50, 6.8e+42, "Hz");

/// kilogram-inverse meter relationship = (4.52443915e+41 ± 2.3e+34) m^-1.
pub const KILOGRAM_INVERSE_METER_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kilogram-inverse meter relationship", 4.52443915e+41, 2.3e+34, "m^-1");

/// kilogram-joule relationship = (8.987551787e+16 ± 0.0) J.
pub const KILOGRAM_JOULE_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kilogram-joule relationship", 8.987551787e+16, 0.0, "J");

/// kilogram-kelvin relationship = (6.509651e+39 ± 1.1e+34) K.
pub const KILOGRAM_KELVIN_RELATIONSHIP: PhysicalConstant =
    PhysicalConstant::new("kilogram-kelvin relationship", 6.509651e+39, 1.1e+34, "K");

/// lattice parameter of silicon = (5.43102064e-10 ± 1.4e-17) m.
pub const LATTICE_PARAMETER_OF_SILICON: PhysicalConstant =
    PhysicalConstant::new("lattice parameter of silicon", 5.43102064e-10, 1.4e-17, "m");

/// Loschmidt constant (273.15 K, 101.325 kPa) = (2.6867774e+25 ± 4.7e+19) m^-3.
pub const LOSCHMIDT_CONSTANT_27315_K_101325_KPA: PhysicalConstant = PhysicalConstant::new(
    "Loschmidt constant (273.15 K, 101.325 kPa)",
    2.6867774e+25,
    4.7e+19,
    "m^-3",
);

/// mag. constant = (1.2566370614e-06 ± 0.0) N A^-2.
pub const MAG_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("mag. constant", 1.2566370614e-06, 0.0, "N A^-2");

/// mag. flux quantum = (2.067833667e-15 ± 5.2e-23) Wb.
pub const MAG_FLUX_QUANTUM: PhysicalConstant =
    PhysicalConstant::new("mag. flux quantum", 2.067833667e-15, 5.2e-23, "Wb");

/// molar gas constant = (8.314472 ± 1.5e-05) J mol^-1 K^-1.
pub const MOLAR_GAS_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("molar gas constant", 8.314472, 1.5e-05, "J mol^-1 K^-1");

/// molar mass constant = (0.001 ± 0.0) kg mol^-1.
pub const MOLAR_MASS_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("molar mass constant", 0.001, 0.0, "kg mol^-1");

/// molar mass of carbon-12 = (0.012 ± 0.0) kg mol^-1.
pub const MOLAR_MASS_OF_CARBON_12: PhysicalConstant =
    PhysicalConstant::new("molar mass of carbon-12", 0.012, 0.0, "kg mol^-1");

/// molar Planck constant = (3.9903126821e-10 ± 5.7e-19) J s mol^-1.
pub const MOLAR_PLANCK_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("molar Planck constant", 3.9903126821e-10, 5.7e-19, "J s mol^-1");

/// molar Planck constant times c = (0.11962656472 ± 1.7e-10) J m mol^-1.
pub const MOLAR_PLANCK_CONSTANT_TIMES_C: PhysicalConstant =
    PhysicalConstant::new("molar Planck constant times c", 0.11962656472, 1.7e-10, "J m mol^-1");

/// molar volume of ideal gas (273.15 K, 100 kPa) = (0.022710981 ± 4e-08) m^3 mol^-1.
pub const MOLAR_VOLUME_OF_IDEAL_GAS_27315_K_100_KPA: PhysicalConstant = PhysicalConstant::new(
    "molar volume of ideal gas (273.15 K, 100 kPa)",
    0.022710981,
    4e-08,
    "m^3 mol^-1",
);

/// molar volume of ideal gas (273.15 K, 101.325 kPa) = (0.022413996 ± 3.9e-08) m^3 mol^-1.
pub const MOLAR_VOLUME_OF_IDEAL_GAS_27315_K_101325_KPA: PhysicalConstant = PhysicalConstant::new(
    "molar volume of ideal gas (273.15 K, 101.325 kPa)",
    0.022413996,
    3.9e-08,
    "m^3 mol^-1",
);

/// molar volume of silicon = (1.20588349e-05 ± 1.1e-12) m^3 mol^-1.
pub const MOLAR_VOLUME_OF_SILICON: PhysicalConstant =
    PhysicalConstant::new("molar volume of silicon", 1.20588349e-05, 1.1e-12, "m^3 mol^-1");

/// Mo x unit = (1.00209955e-13 ± 5.3e-20) m.
pub const MO_X_UNIT: PhysicalConstant =
    PhysicalConstant::new("Mo x unit", 1.00209955e-13, 5.3e-20, "m");

/// muon Compton wavelength = (1.173444104e-14 ± 3e-22) m.
pub const MUON_COMPTON_WAVELENGTH: PhysicalConstant =
    PhysicalConstant::new("muon Compton wavelength", 1.173444104e-14, 3e-22, "m");

/// muon Compton wavelength over 2 pi = (1.867594295e-15 ± 4.7e-23) m.
pub const MUON_COMPTON_WAVELENGTH_OVER_2_PI: PhysicalConstant =
    PhysicalConstant::new("muon Compton wavelength over 2 pi", 1.867594295e-15, 4.7e-23, "m");

/// muon-electron mass ratio = (206.7682823 ± 5.2e-06).
pub const MUON_ELECTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("muon-electron mass ratio", 206.7682823, 5.2e-06, "");

/// muon g factor = (-2.0023318414 ± 1.2e-09).
pub const MUON_G_FACTOR: PhysicalConstant =
    PhysicalConstant::new("muon g factor", -2.0023318414, 1.2e-09, "");

/// muon mag. mom. = (-4.49044786e-26 ± 1.6e-33) J T^-1.
pub const MUON_MAG_MOM: PhysicalConstant =
    PhysicalConstant::new("muon mag. mom.", -4.49044786e-26, 1.6e-33, "J T^-1");

/// muon mag. mom. anomaly = (0.00116592069 ± 6e-10).
pub const MUON_MAG_MOM_ANOMALY: PhysicalConstant =
    PhysicalConstant::new("muon mag. mom. anomaly", 0.00116592069, 6e-10, "");

/// muon mag. mom. to Bohr magneton ratio = (-0.00484197049 ± 1.2e-10).
pub const MUON_MAG_MOM_TO_BOHR_MAGNETON_RATIO: PhysicalConstant =
    PhysicalConstant::new("muon mag. mom. to Bohr magneton ratio", -0.00484197049, 1.2e-10, "");

/// muon mag. mom. to nuclear magneton ratio = (-8.89059705 ± 2.3e-07).
pub const MUON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO: PhysicalConstant =
    PhysicalConstant::new("muon mag. mom. to nuclear magneton ratio", -8.89059705, 2.3e-07, "");

/// muon mass = (1.8835313e-28 ± 1.1e-35) kg.
pub const MUON_MASS: PhysicalConstant =
    PhysicalConstant::new("muon mass", 1.8835313e-28, 1.1e-35, "kg");

/// muon mass energy equivalent = (1.69283351e-11 ± 9.5e-19) J.
pub const MUON_MASS_ENERGY_EQUIVALENT: PhysicalConstant =
    PhysicalConstant::new("muon mass energy equivalent", 1.69283351e-11, 9.5e-19, "J");

/// muon mass energy equivalent in MeV = (105.6583668 ± 3.8e-06) MeV.
pub const MUON_MASS_ENERGY_EQUIVALENT_IN_MEV: PhysicalConstant =
    PhysicalConstant::new("muon mass energy equivalent in MeV", 105.6583668, 3.8e-06, "MeV");

/// muon mass in u = (0.1134289256 ± 2.9e-09) u.
pub const MUON_MASS_IN_U: PhysicalConstant =
    PhysicalConstant::new("muon mass in u", 0.1134289256, 2.9e-09, "u");

/// muon molar mass = (0.0001134289256 ± 2.9e-12) kg mol^-1.
pub const MUON_MOLAR_MASS: PhysicalConstant =
    PhysicalConstant::new("muon molar mass", 0.0001134289256, 2.9e-12, "kg mol^-1");

/// muon-neutron mass ratio = (0.1124545167 ± 2.9e-09).
pub const MUON_NEUTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("muon-neutron mass ratio", 0.1124545167, 2.9e-09, "");

/// muon-proton mag. mom. ratio = (-3.183345137 ± 8.5e-08).
pub const MUON_PROTON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("muon-proton mag. mom. ratio", -3.183345137, 8.5e-08, "");

/// muon-proton mass ratio = (0.1126095261 ± 2.9e-09).
pub const MUON_PROTON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("muon-proton mass ratio", 0.1126095261, 2.9e-09, "");

/// muon-tau mass ratio = (0.0594592 ± 9.7e-06).
pub const MUON_TAU_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("muon-tau mass ratio", 0.0594592, 9.7e-06, "");

/// natural unit of action = (1.054571628e-34 ± 5.3e-42) J s.
pub const NATURAL_UNIT_OF_ACTION: PhysicalConstant =
    PhysicalConstant::new("natural unit of action", 1.054571628e-34, 5.3e-42, "J s");

/// natural unit of action in eV s = (6.58211899e-16 ± 1.6e-23) eV s.
pub const NATURAL_UNIT_OF_ACTION_IN_EV_S: PhysicalConstant =
    PhysicalConstant::new("natural unit of action in eV s", 6.58211899e-16, 1.6e-23, "eV s");

/// natural unit of energy = (8.18710438e-14 ± 4.1e-21) J.
pub const NATURAL_UNIT_OF_ENERGY: PhysicalConstant =
    PhysicalConstant::new("natural unit of energy", 8.18710438e-14, 4.1e-21, "J");

/// natural unit of energy in MeV = (0.51099891 ± 1.3e-08) MeV.
pub const NATURAL_UNIT_OF_ENERGY_IN_MEV: PhysicalConstant =
    PhysicalConstant::new("natural unit of energy in MeV", 0.51099891, 1.3e-08, "MeV");

/// natural unit of length = (3.8615926459e-13 ± 5.3e-22) m.
pub const NATURAL_UNIT_OF_LENGTH: PhysicalConstant =
    PhysicalConstant::new("natural unit of length", 3.8615926459e-13, 5.3e-22, "m");

/// natural unit of mass = (9.10938215e-31 ± 4.5e-38) kg.
pub const NATURAL_UNIT_OF_MASS: PhysicalConstant =
    PhysicalConstant::new("natural unit of mass", 9.10938215e-31, 4.5e-38, "kg");

/// natural unit of momentum = (2.73092406e-22 ± 1.4e-29) kg m s^-1.
pub const NATURAL_UNIT_OF_MOMENTUM: PhysicalConstant =
    PhysicalConstant::new("natural unit of momentum", 2.73092406e-22, 1.4e-29, "kg m s^-1");

/// natural unit of momentum in MeV/c = (0.51099891 ± 1.3e-08) MeV/c.
pub const NATURAL_UNIT_OF_MOMENTUM_IN_MEV_C: PhysicalConstant =
    PhysicalConstant::new("natural unit of momentum in MeV/c", 0.51099891, 1.3e-08, "MeV/c");

/// natural unit of time = (1.288088657e-21 ± 1.8e-30) s.
pub const NATURAL_UNIT_OF_TIME: PhysicalConstant =
    PhysicalConstant::new("natural unit of time", 1.288088657e-21, 1.8e-30, "s");

/// natural unit of velocity = (299792458.0 ± 0.0) m s^-1.
pub const NATURAL_UNIT_OF_VELOCITY: PhysicalConstant =
    PhysicalConstant::new("natural unit of velocity", 299792458.0, 0.0, "m s^-1");

/// neutron Compton wavelength = (1.3195908951e-15 ± 2e-24) m.
pub const NEUTRON_COMPTON_WAVELENGTH: PhysicalConstant =
    PhysicalConstant::new("neutron Compton wavelength", 1.3195908951e-15, 2e-24, "m");

/// neutron Compton wavelength over 2 pi = (2.1001941382e-16 ± 3.1e-25) m.
pub const NEUTRON_COMPTON_WAVELENGTH_OVER_2_PI: PhysicalConstant =
    PhysicalConstant::new("neutron Compton wavelength over 2 pi", 2.1001941382e-16, 3.1e-25, "m");

/// neutron-electron mag. mom. ratio = (0.00104066882 ± 2.5e-10).
pub const NEUTRON_ELECTRON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("neutron-electron mag. mom. ratio", 0.00104066882, 2.5e-10, "");

/// neutron-electron mass ratio = (1838.6836605 ± 1.1e-06).
pub const NEUTRON_ELECTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("neutron-electron mass ratio", 1838.6836605, 1.1e-06, "");

/// neutron g factor = (-3.82608545 ± 9e-07).
pub const NEUTRON_G_FACTOR: PhysicalConstant =
    PhysicalConstant::new("neutron g factor", -3.82608545, 9e-07, "");

/// neutron gyromag. ratio = (183247185.0 ± 43.0) s^-1 T^-1.
pub const NEUTRON_GYROMAG_RATIO: PhysicalConstant =
    PhysicalConstant::new("neutron gyromag. ratio", 183247185.0, 43.0, "s^-1 T^-1");

/// neutron gyromag. ratio over 2 pi = (29.1646954 ± 6.9e-06) MHz T^-1.
pub const NEUTRON_GYROMAG_RATIO_OVER_2_PI: PhysicalConstant =
    PhysicalConstant::new("neutron gyromag. ratio over 2 pi", 29.1646954, 6.9e-06, "MHz T^-1");

/// neutron mag. mom. = (-9.6623641e-27 ± 2.3e-33) J T^-1.
pub const NEUTRON_MAG_MOM: PhysicalConstant =
    PhysicalConstant::new("neutron mag. mom.", -9.6623641e-27, 2.3e-33, "J T^-1");

/// neutron mag. mom. to Bohr magneton ratio = (-0.00104187563 ± 2.5e-10).
pub const NEUTRON_MAG_MOM_TO_BOHR_MAGNETON_RATIO: PhysicalConstant =
    PhysicalConstant::new("neutron mag. mom. to Bohr magneton ratio", -0.00104187563, 2.5e-10, "");

/// neutron mag. mom. to nuclear magneton ratio = (-1.91304273 ± 4.5e-07).
pub const NEUTRON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO: PhysicalConstant =
    PhysicalConstant::new("neutron mag. mom. to nuclear magneton ratio", -1.91304273, 4.5e-07, "");

/// neutron mass = (1.674927211e-27 ± 8.4e-35) kg.
pub const NEUTRON_MASS: PhysicalConstant =
    PhysicalConstant::new("neutron mass", 1.674927211e-27, 8.4e-35, "kg");

/// neutron mass energy equivalent = (1.505349505e-10 ± 7.5e-18) J.
pub const NEUTRON_MASS_ENERGY_EQUIVALENT: PhysicalConstant =
    PhysicalConstant::new("neutron mass energy equivalent", 1.505349505e-10, 7.5e-18, "J");

/// neutron mass energy equivalent in MeV = (939.565346 ± 2.3e-05) MeV.
pub const NEUTRON_MASS_ENERGY_EQUIVALENT_IN_MEV: PhysicalConstant =
    PhysicalConstant::new("neutron mass energy equivalent in MeV", 939.565346, 2.3e-05, "MeV");

/// neutron mass in u = (1.00866491597 ± 4.3e-10) u.
pub const NEUTRON_MASS_IN_U: PhysicalConstant =
    PhysicalConstant::new("neutron mass in u", 1.00866491597, 4.3e-10, "u");

/// neutron molar mass = (0.00100866491597 ± 4.3e-13) kg mol^-1.
pub const NEUTRON_MOLAR_MASS: PhysicalConstant =
    PhysicalConstant::new("neutron molar mass", 0.00100866491597, 4.3e-13, "kg mol^-1");

/// neutron-muon mass ratio = (8.89248409 ± 2.3e-07).
pub const NEUTRON_MUON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("neutron-muon mass ratio", 8.89248409, 2.3e-07, "");

/// neutron-proton mag. mom. ratio = (-0.68497934 ± 1.6e-07).
pub const NEUTRON_PROTON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("neutron-proton mag. mom. ratio", -0.68497934, 1.6e-07, "");

/// neutron-proton mass ratio = (1.00137841918 ± 4.6e-10).
pub const NEUTRON_PROTON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("neutron-proton mass ratio", 1.00137841918, 4.6e-10, "");

/// neutron-tau mass ratio = (0.52874 ± 8.6e-05).
pub const NEUTRON_TAU_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("neutron-tau mass ratio", 0.52874, 8.6e-05, "");

/// neutron to shielded proton mag. mom. ratio = (-0.68499694 ± 1.6e-07).
pub const NEUTRON_TO_SHIELDED_PROTON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("neutron to shielded proton mag. mom. ratio", -0.68499694, 1.6e-07, "");

/// Newtonian constant of gravitation = (6.67428e-11 ± 6.7e-15) m^3 kg^-1 s^-2.
pub const NEWTONIAN_CONSTANT_OF_GRAVITATION: PhysicalConstant = PhysicalConstant::new(
    "Newtonian constant of gravitation",
    6.67428e-11,
    6.7e-15,
    "m^3 kg^-1 s^-2",
);

/// Newtonian constant of gravitation over h-bar c = (6.70881e-39 ± 6.7e-43) (GeV/c^2)^-2.
pub const NEWTONIAN_CONSTANT_OF_GRAVITATION_OVER_H_BAR_C: PhysicalConstant = PhysicalConstant::new(
    "Newtonian constant of gravitation over h-bar c",
    6.70881e-39,
    6.7e-43,
    "(GeV/c^2)^-2",
);

/// nuclear magneton = (5.05078324e-27 ± 1.3e-34) J T^-1.
pub const NUCLEAR_MAGNETON: PhysicalConstant =
    PhysicalConstant::new("nuclear magneton", 5.05078324e-27, 1.3e-34, "J T^-1");

/// nuclear magneton in eV/T = (3.1524512326e-08 ± 4.5e-17) eV T^-1.
pub const NUCLEAR_MAGNETON_IN_EV_T: PhysicalConstant =
    PhysicalConstant::new("nuclear magneton in eV/T", 3.1524512326e-08, 4.5e-17, "eV T^-1");

/// nuclear magneton in inverse meters per tesla = (0.02542623616 ± 6.4e-10) m^-1 T^-1.
pub const NUCLEAR_MAGNETON_IN_INVERSE_METERS_PER_TESLA: PhysicalConstant = PhysicalConstant::new(
    "nuclear magneton in inverse meters per tesla",
    0.02542623616,
    6.4e-10,
    "m^-1 T^-1",
);

/// nuclear magneton in K/T = (0.00036582637 ± 6.4e-10) K T^-1.
pub const NUCLEAR_MAGNETON_IN_K_T: PhysicalConstant =
    PhysicalConstant::new("nuclear magneton in K/T", 0.00036582637, 6.4e-10, "K T^-1");

/// nuclear magneton in MHz/T = (7.62259384 ± 1.9e-07) MHz T^-1.
pub const NUCLEAR_MAGNETON_IN_MHZ_T: PhysicalConstant =
    PhysicalConstant::new("nuclear magneton in MHz/T", 7.62259384, 1.9e-07, "MHz T^-1");

/// Planck constant = (6.62606896e-34 ± 3.3e-41) J s.
pub const PLANCK_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("Planck constant", 6.62606896e-34, 3.3e-41, "J s");

/// Planck constant in eV s = (4.13566733e-15 ± 1e-22) eV s.
pub const PLANCK_CONSTANT_IN_EV_S: PhysicalConstant =
    PhysicalConstant::new("Planck constant in eV s", 4.13566733e-15, 1e-22, "eV s");

/// Planck constant over 2 pi = (1.054571628e-34 ± 5.3e-42) J s.
pub const PLANCK_CONSTANT_OVER_2_PI: PhysicalConstant =
    PhysicalConstant::new("Planck constant over 2 pi", 1.054571628e-34, 5.3e-42, "J s");

/// Planck constant over 2 pi in eV s = (6.58211899e-16 ± 1.6e-23) eV s.
pub const PLANCK_CONSTANT_OVER_2_PI_IN_EV_S: PhysicalConstant =
    PhysicalConstant::new("Planck constant over 2 pi in eV s", 6.58211899e-16, 1.6e-23, "eV s");

/// Planck constant over 2 pi times c in MeV fm = (197.3269631 ± 4.9e-06) MeV fm.
pub const PLANCK_CONSTANT_OVER_2_PI_TIMES_C_IN_MEV_FM: PhysicalConstant = PhysicalConstant::new(
    "Planck constant over 2 pi times c in MeV fm",
    197.3269631,
    4.9e-06,
    "MeV fm",
);

/// Planck length = (1.616252e-35 ± 8.1e-40) m.
pub const PLANCK_LENGTH: PhysicalConstant =
    PhysicalConstant::new("Planck length", 1.616252e-35, 8.1e-40, "m");

/// Planck mass = (2.17644e-08 ± 1.1e-12) kg.
pub const PLANCK_MASS: PhysicalConstant =
    PhysicalConstant::new("Planck mass", 2.17644e-08, 1.1e-12, "kg");

/// Planck mass energy equivalent in GeV = (1.220892e+19 ± 610000000000000.0) GeV.
pub const PLANCK_MASS_ENERGY_EQUIVALENT_IN_GEV: PhysicalConstant = PhysicalConstant::new(
    "Planck mass energy equivalent in GeV",
    1.220892e+19,
    610000000000000.0,
    "GeV",
);

/// Planck temperature = (1.416785e+32 ± 7.1e+27) K.
pub const PLANCK_TEMPERATURE: PhysicalConstant =
    PhysicalConstant::new("Planck temperature", 1.416785e+32, 7.1e+27, "K");

/// Planck time = (5.39124e-44 ± 2.7e-48) s.
pub const PLANCK_TIME: PhysicalConstant =
    PhysicalConstant::new("Planck time", 5.39124e-44, 2.7e-48, "s");

/// proton charge to mass quotient = (95788339.2 ± 2.4) C kg^-1.
pub const PROTON_CHARGE_TO_MASS_QUOTIENT: PhysicalConstant =
    PhysicalConstant::new("proton charge to mass quotient", 95788339.2, 2.4, "C kg^-1");

/// proton Compton wavelength = (1.3214098446e-15 ± 1.9e-24) m.
pub const PROTON_COMPTON_WAVELENGTH: PhysicalConstant =
    PhysicalConstant::new("proton Compton wavelength", 1.3214098446e-15, 1.9e-24, "m");

/// proton Compton wavelength over 2 pi = (2.1030890861e-16 ± 3e-25) m.
pub const PROTON_COMPTON_WAVELENGTH_OVER_2_PI: PhysicalConstant =
    PhysicalConstant::new("proton Compton wavelength over 2 pi", 2.1030890861e-16, 3e-25, "m");

/// proton-electron mass ratio = (1836.15267247 ± 8e-07).
pub const PROTON_ELECTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("proton-electron mass ratio", 1836.15267247, 8e-07, "");

/// proton g factor = (5.585694713 ± 4.6e-08).
pub const PROTON_G_FACTOR: PhysicalConstant =
    PhysicalConstant::new("proton g factor", 5.585694713, 4.6e-08, "");

/// proton gyromag. ratio = (267522209.9 ± 7.0) s^-1 T^-1.
pub const PROTON_GYROMAG_RATIO: PhysicalConstant =
    PhysicalConstant::new("proton gyromag. ratio", 267522209.9, 7.0, "s^-1 T^-1");

/// proton gyromag. ratio over 2 pi = (42.5774821 ± 1.1e-06) MHz T^-1.
pub const PROTON_GYROMAG_RATIO_OVER_2_PI: PhysicalConstant =
    PhysicalConstant::new("proton gyromag. ratio over 2 pi", 42.5774821, 1.1e-06, "MHz T^-1");

/// proton mag. mom. = (1.410606662e-26 ± 3.7e-34) J T^-1.
pub const PROTON_MAG_MOM: PhysicalConstant =
    PhysicalConstant::new("proton mag. mom.", 1.410606662e-26, 3.7e-34, "J T^-1");

/// proton mag. mom. to Bohr magneton ratio = (0.001521032209 ± 1.2e-11).
pub const PROTON_MAG_MOM_TO_BOHR_MAGNETON_RATIO: PhysicalConstant =
    PhysicalConstant::new("proton mag. mom. to Bohr magneton ratio", 0.001521032209, 1.2e-11, "");

/// proton mag. mom. to nuclear magneton ratio = (2.792847356 ± 2.3e-08).
pub const PROTON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO: PhysicalConstant =
    PhysicalConstant::new("proton mag. mom. to nuclear magneton ratio", 2.792847356, 2.3e-08, "");

/// proton mag. shielding correction = (2.5694e-05 ± 1.4e-08).
pub const PROTON_MAG_SHIELDING_CORRECTION: PhysicalConstant =
    PhysicalConstant::new("proton mag. shielding correction", 2.5694e-05, 1.4e-08, "");

/// proton mass = (1.672621637e-27 ± 8.3e-35) kg.
pub const PROTON_MASS: PhysicalConstant =
    PhysicalConstant::new("proton mass", 1.672621637e-27, 8.3e-35, "kg");

/// proton mass energy equivalent = (1.503277359e-10 ± 7.5e-18) J.
pub const PROTON_MASS_ENERGY_EQUIVALENT: PhysicalConstant =
    PhysicalConstant::new("proton mass energy equivalent", 1.503277359e-10, 7.5e-18, "J");

/// proton mass energy equivalent in MeV = (938.272013 ± 2.3e-05) MeV.
pub const PROTON_MASS_ENERGY_EQUIVALENT_IN_MEV: PhysicalConstant =
    PhysicalConstant::new("proton mass energy equivalent in MeV", 938.272013, 2.3e-05, "MeV");

/// proton mass in u = (1.00727646677 ± 1e-10) u.
pub const PROTON_MASS_IN_U: PhysicalConstant =
    PhysicalConstant::new("proton mass in u", 1.00727646677, 1e-10, "u");

/// proton molar mass = (0.00100727646677 ± 1e-13) kg mol^-1.
pub const PROTON_MOLAR_MASS: PhysicalConstant =
    PhysicalConstant::new("proton molar mass", 0.00100727646677, 1e-13, "kg mol^-1");

/// proton-muon mass ratio = (8.88024339 ± 2.3e-07).
pub const PROTON_MUON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("proton-muon mass ratio", 8.88024339, 2.3e-07, "");

/// proton-neutron mag. mom. ratio = (-1.45989806 ± 3.4e-07).
pub const PROTON_NEUTRON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("proton-neutron mag. mom. ratio", -1.45989806, 3.4e-07, "");

/// proton-neutron mass ratio = (0.99862347824 ± 4.6e-10).
pub const PROTON_NEUTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("proton-neutron mass ratio", 0.99862347824, 4.6e-10, "");

/// proton rms charge radius = (8.768e-16 ± 6.9e-18) m.
pub const PROTON_RMS_CHARGE_RADIUS: PhysicalConstant =
    PhysicalConstant::new("proton rms charge radius", 8.768e-16, 6.9e-18, "m");

/// proton-tau mass ratio = (0.528012 ± 8.6e-05).
pub const PROTON_TAU_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("proton-tau mass ratio", 0.528012, 8.6e-05, "");

/// quantum of circulation = (0.00036369475199 ± 5e-13) m^2 s^-1.
pub const QUANTUM_OF_CIRCULATION: PhysicalConstant =
    PhysicalConstant::new("quantum of circulation", 0.00036369475199, 5e-13, "m^2 s^-1");

/// quantum of circulation times 2 = (0.000727389504 ± 1e-12) m^2 s^-1.
pub const QUANTUM_OF_CIRCULATION_TIMES_2: PhysicalConstant =
    PhysicalConstant::new("quantum of circulation times 2", 0.000727389504, 1e-12, "m^2 s^-1");

/// Rydberg constant = (10973731.568527 ± 7.3e-05) m^-1.
pub const RYDBERG_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("Rydberg constant", 10973731.568527, 7.3e-05, "m^-1");

/// Rydberg constant times c in Hz = (3289841960361000.0 ± 22000.0) Hz.
pub const RYDBERG_CONSTANT_TIMES_C_IN_HZ: PhysicalConstant =
    PhysicalConstant::new("Rydberg constant times c in Hz", 3289841960361000.0, 22000.0, "Hz");

/// Rydberg constant times hc in eV = (13.60569193 ± 3.4e-07) eV.
pub const RYDBERG_CONSTANT_TIMES_HC_IN_EV: PhysicalConstant =
    PhysicalConstant::new("Rydberg constant times hc in eV", 13.60569193, 3.4e-07, "eV");

/// Rydberg constant times hc in J = (2.17987197e-18 ± 1.1e-25) J.
pub const RYDBERG_CONSTANT_TIMES_HC_IN_J: PhysicalConstant =
    PhysicalConstant::new("Rydberg constant times hc in J", 2.17987197e-18, 1.1e-25, "J");

/// Sackur-Tetrode constant (1 K, 100 kPa) = (-1.1517047 ± 4.4e-06).
pub const SACKUR_TETRODE_CONSTANT_1_K_100_KPA: PhysicalConstant =
    PhysicalConstant::new("Sackur-Tetrode constant (1 K, 100 kPa)", -1.1517047, 4.4e-06, "");

/// Sackur-Tetrode constant (1 K, 101.325 kPa) = (-1.1648677 ± 4.4e-06).
pub const SACKUR_TETRODE_CONSTANT_1_K_101325_KPA: PhysicalConstant =
    PhysicalConstant::new("Sackur-Tetrode constant (1 K, 101.325 kPa)", -1.1648677, 4.4e-06, "");

/// second radiation constant = (0.014387752 ± 2.5e-08) m K.
pub const SECOND_RADIATION_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("second radiation constant", 0.014387752, 2.5e-08, "m K");

/// shielded helion gyromag. ratio = (203789473.0 ± 5.6) s^-1 T^-1.
pub const SHIELDED_HELION_GYROMAG_RATIO: PhysicalConstant =
    PhysicalConstant::new("shielded helion gyromag. ratio", 203789473.0, 5.6, "s^-1 T^-1");

/// shielded helion gyromag. ratio over 2 pi = (32.43410198 ± 9e-07) MHz T^-1.
pub const SHIELDED_HELION_GYROMAG_RATIO_OVER_2_PI: PhysicalConstant = PhysicalConstant::new(
    "shielded helion gyromag. ratio over 2 pi",
    32.43410198,
    9e-07,
    "MHz T^-1",
);

/// shielded helion mag. mom. = (-1.074552982e-26 ± 3e-34) J T^-1.
pub const SHIELDED_HELION_MAG_MOM: PhysicalConstant =
    PhysicalConstant::new("shielded helion mag. mom.", -1.074552982e-26, 3e-34, "J T^-1");

/// shielded helion mag. mom. to Bohr magneton ratio = (-0.001158671471 ± 1.4e-11).
pub const SHIELDED_HELION_MAG_MOM_TO_BOHR_MAGNETON_RATIO: PhysicalConstant = PhysicalConstant::new(
    "shielded helion mag. mom. to Bohr magneton ratio",
    -0.001158671471,
    1.4e-11,
    "",
);

/// shielded helion mag. mom. to nuclear magneton ratio = (-2.127497718 ± 2.5e-08).
pub const SHIELDED_HELION_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO: PhysicalConstant =
    PhysicalConstant::new(
        "shielded helion mag. mom. to nuclear magneton ratio",
        -2.127497718,
        2.5e-08,
        "",
    );

/// shielded helion to proton mag. mom. ratio = (-0.761766558 ± 1.1e-08).
pub const SHIELDED_HELION_TO_PROTON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("shielded helion to proton mag. mom. ratio", -0.761766558, 1.1e-08, "");

/// shielded helion to shielded proton mag. mom. ratio = (-0.7617861313 ± 3.3e-09).
pub const SHIELDED_HELION_TO_SHIELDED_PROTON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new(
        "shielded helion to shielded proton mag. mom. ratio",
        -0.7617861313,
        3.3e-09,
        "",
    );

/// shielded proton gyromag. ratio = (267515336.2 ± 7.3) s^-1 T^-1.
pub const SHIELDED_PROTON_GYROMAG_RATIO: PhysicalConstant =
    PhysicalConstant::new("shielded proton gyromag. ratio", 267515336.2, 7.3, "s^-1 T^-1");

/// shielded proton gyromag. ratio over 2 pi = (42.5763881 ± 1.2e-06) MHz T^-1.
pub const SHIELDED_PROTON_GYROMAG_RATIO_OVER_2_PI: PhysicalConstant = PhysicalConstant::new(
    "shielded proton gyromag. ratio over 2 pi",
    42.5763881,
    1.2e-06,
    "MHz T^-1",
);

/// shielded proton mag. mom. = (1.410570419e-26 ± 3.8e-34) J T^-1.
pub const SHIELDED_PROTON_MAG_MOM: PhysicalConstant =
    PhysicalConstant::new("shielded proton mag. mom.", 1.410570419e-26, 3.8e-34, "J T^-1");

/// shielded proton mag. mom. to Bohr magneton ratio = (0.001520993128 ± 1.7e-11).
pub const SHIELDED_PROTON_MAG_MOM_TO_BOHR_MAGNETON_RATIO: PhysicalConstant = PhysicalConstant::new(
    "shielded proton mag. mom. to Bohr magneton ratio",
    0.001520993128,
    1.7e-11,
    "",
);

/// shielded proton mag. mom. to nuclear magneton ratio = (2.792775598 ± 3e-08).
pub const SHIELDED_PROTON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO: PhysicalConstant =
    PhysicalConstant::new(
        "shielded proton mag. mom. to nuclear magneton ratio",
        2.792775598,
        3e-08,
        "",
    );

/// speed of light in vacuum = (299792458.0 ± 0.0) m s^-1.
pub const SPEED_OF_LIGHT_IN_VACUUM: PhysicalConstant =
    PhysicalConstant::new("speed of light in vacuum", 299792458.0, 0.0, "m s^-1");

/// standard acceleration of gravity = (9.80665 ± 0.0) m s^-2.
pub const STANDARD_ACCELERATION_OF_GRAVITY: PhysicalConstant =
    PhysicalConstant::new("standard acceleration of gravity", 9.80665, 0.0, "m s^-2");

/// standard atmosphere = (101325.0 ± 0.0) Pa.
pub const STANDARD_ATMOSPHERE: PhysicalConstant =
    PhysicalConstant::new("standard atmosphere", 101325.0, 0.0, "Pa");

/// Stefan-Boltzmann constant = (5.6704e-08 ± 4e-13) W m^-2 K^-4.
pub const STEFAN_BOLTZMANN_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("Stefan-Boltzmann constant", 5.6704e-08, 4e-13, "W m^-2 K^-4");

/// tau Compton wavelength = (6.9772e-16 ± 1.1e-19) m.
pub const TAU_COMPTON_WAVELENGTH: PhysicalConstant =
    PhysicalConstant::new("tau Compton wavelength", 6.9772e-16, 1.1e-19, "m");

/// tau Compton wavelength over 2 pi = (1.11046e-16 ± 1.8e-20) m.
pub const TAU_COMPTON_WAVELENGTH_OVER_2_PI: PhysicalConstant =
    PhysicalConstant::new("tau Compton wavelength over 2 pi", 1.11046e-16, 1.8e-20, "m");

/// tau-electron mass ratio = (3477.48 ± 0.57).
pub const TAU_ELECTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("tau-electron mass ratio", 3477.48, 0.57, "");

/// tau mass = (3.16777e-27 ± 5.2e-31) kg.
pub const TAU_MASS: PhysicalConstant =
    PhysicalConstant::new("tau mass", 3.16777e-27, 5.2e-31, "kg");

/// tau mass energy equivalent = (2.84705e-10 ± 4.6e-14) J.
pub const TAU_MASS_ENERGY_EQUIVALENT: PhysicalConstant =
    PhysicalConstant::new("tau mass energy equivalent", 2.84705e-10, 4.6e-14, "J");

/// tau mass energy equivalent in MeV = (1776.99 ± 0.29) MeV.
pub const TAU_MASS_ENERGY_EQUIVALENT_IN_MEV: PhysicalConstant =
    PhysicalConstant::new("tau mass energy equivalent in MeV", 1776.99, 0.29, "MeV");

/// tau mass in u = (1.90768 ± 0.00031) u.
pub const TAU_MASS_IN_U: PhysicalConstant =
    PhysicalConstant::new("tau mass in u", 1.90768, 0.00031, "u");

/// tau molar mass = (0.00190768 ± 3.1e-07) kg mol^-1.
pub const TAU_MOLAR_MASS: PhysicalConstant =
    PhysicalConstant::new("tau molar mass", 0.00190768, 3.1e-07, "kg mol^-1");

/// tau-muon mass ratio = (16.8183 ± 0.0027).
pub const TAU_MUON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("tau-muon mass ratio", 16.8183, 0.0027, "");

/// tau-neutron mass ratio = (1.89129 ± 0.00031).
pub const TAU_NEUTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("tau-neutron mass ratio", 1.89129, 0.00031, "");

/// tau-proton mass ratio = (1.8939 ± 0.00031).
pub const TAU_PROTON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("tau-proton mass ratio", 1.8939, 0.00031, "");

/// Thomson cross section = (6.652458558e-29 ± 2.7e-37) m^2.
pub const THOMSON_CROSS_SECTION: PhysicalConstant =
    PhysicalConstant::new("Thomson cross section", 6.652458558e-29, 2.7e-37, "m^2");

/// triton-electron mag. mom. ratio = (-0.001620514423 ± 2.1e-11).
pub const TRITON_ELECTRON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("triton-electron mag. mom. ratio", -0.001620514423, 2.1e-11, "");

/// triton-electron mass ratio = (5496.9215269 ± 5.1e-06).
pub const TRITON_ELECTRON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("triton-electron mass ratio", 5496.9215269, 5.1e-06, "");

/// triton g factor = (5.957924896 ± 7.6e-08).
pub const TRITON_G_FACTOR: PhysicalConstant =
    PhysicalConstant::new("triton g factor", 5.957924896, 7.6e-08, "");

/// triton mag. mom. = (1.504609361e-26 ± 4.2e-34) J T^-1.
pub const TRITON_MAG_MOM: PhysicalConstant =
    PhysicalConstant::new("triton mag. mom.", 1.504609361e-26, 4.2e-34, "J T^-1");

/// triton mag. mom. to Bohr magneton ratio = (0.001622393657 ± 2.1e-11).
pub const TRITON_MAG_MOM_TO_BOHR_MAGNETON_RATIO: PhysicalConstant =
    PhysicalConstant::new("triton mag. mom. to Bohr magneton ratio", 0.001622393657, 2.1e-11, "");

/// triton mag. mom. to nuclear magneton ratio = (2.978962448 ± 3.8e-08).
pub const TRITON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO: PhysicalConstant =
    PhysicalConstant::new("triton mag. mom. to nuclear magneton ratio", 2.978962448, 3.8e-08, "");

/// triton mass = (5.00735588e-27 ± 2.5e-34) kg.
pub const TRITON_MASS: PhysicalConstant =
    PhysicalConstant::new("triton mass", 5.00735588e-27, 2.5e-34, "kg");

/// triton mass energy equivalent = (4.50038703e-10 ± 2.2e-17) J.
pub const TRITON_MASS_ENERGY_EQUIVALENT: PhysicalConstant =
    PhysicalConstant::new("triton mass energy equivalent", 4.50038703e-10, 2.2e-17, "J");

/// triton mass energy equivalent in MeV = (2808.920906 ± 7e-05) MeV.
pub const TRITON_MASS_ENERGY_EQUIVALENT_IN_MEV: PhysicalConstant =
    PhysicalConstant::new("triton mass energy equivalent in MeV", 2808.920906, 7e-05, "MeV");

/// triton mass in u = (3.0155007134 ± 2.5e-09) u.
pub const TRITON_MASS_IN_U: PhysicalConstant =
    PhysicalConstant::new("triton mass in u", 3.0155007134, 2.5e-09, "u");

/// triton molar mass = (0.0030155007134 ± 2.5e-12) kg mol^-1.
pub const TRITON_MOLAR_MASS: PhysicalConstant =
    PhysicalConstant::new("triton molar mass", 0.0030155007134, 2.5e-12, "kg mol^-1");

/// triton-neutron mag. mom. ratio = (-1.55718553 ± 3.7e-07).
pub const TRITON_NEUTRON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("triton-neutron mag. mom. ratio", -1.55718553, 3.7e-07, "");

/// triton-proton mag. mom. ratio = (1.066639908 ± 1e-08).
pub const TRITON_PROTON_MAG_MOM_RATIO: PhysicalConstant =
    PhysicalConstant::new("triton-proton mag. mom. ratio", 1.066639908, 1e-08, "");

/// triton-proton mass ratio = (2.9937170309 ± 2.5e-09).
pub const TRITON_PROTON_MASS_RATIO: PhysicalConstant =
    PhysicalConstant::new("triton-proton mass ratio", 2.9937170309, 2.5e-09, "");

/// unified atomic mass unit = (1.660538782e-27 ± 8.3e-35) kg.
pub const UNIFIED_ATOMIC_MASS_UNIT: PhysicalConstant =
    PhysicalConstant::new("unified atomic mass unit", 1.660538782e-27, 8.3e-35, "kg");

/// von Klitzing constant = (25812.807557 ± 1.8e-05) ohm.
pub const VON_KLITZING_CONSTANT: PhysicalConstant =
    PhysicalConstant::new("von Klitzing constant", 25812.807557, 1.8e-05, "ohm");

/// weak mixing angle = (0.22255 ± 0.00056).
pub const WEAK_MIXING_ANGLE: PhysicalConstant =
    PhysicalConstant::new("weak mixing angle", 0.22255, 0.00056, "");

/// Wien frequency displacement law constant = (58789330000.0 ± 100000.0) Hz K^-1.
pub const WIEN_FREQUENCY_DISPLACEMENT_LAW_CONSTANT: PhysicalConstant = PhysicalConstant::new(
    "Wien frequency displacement law constant",
    58789330000.0,
    100000.0,
    "Hz K^-1",
);

/// Wien wavelength displacement law constant = (0.0028977685 ± 5.1e-09) m K.
pub const WIEN_WAVELENGTH_DISPLACEMENT_LAW_CONSTANT: PhysicalConstant = PhysicalConstant::new(
    "Wien wavelength displacement law constant",
    0.0028977685,
    5.1e-09,
    "m K",
);

/// Every CODATA 2006 entry, in NIST publication order.
pub static ALL: [PhysicalConstant; 326] = [
    LATTICE_SPACING_OF_SILICON,
    ALPHA_PARTICLE_ELECTRON_MASS_RATIO,
    ALPHA_PARTICLE_MASS,
    ALPHA_PARTICLE_MASS_ENERGY_EQUIVALENT,
    ALPHA_PARTICLE_MASS_ENERGY_EQUIVALENT_IN_MEV,
    ALPHA_PARTICLE_MASS_IN_U,
    ALPHA_PARTICLE_MOLAR_MASS,
    ALPHA_PARTICLE_PROTON_MASS_RATIO,
    ANGSTROM_STAR,
    ATOMIC_MASS_CONSTANT,
    ATOMIC_MASS_CONSTANT_ENERGY_EQUIVALENT,
    ATOMIC_MASS_CONSTANT_ENERGY_EQUIVALENT_IN_MEV,
    ATOMIC_MASS_UNIT_ELECTRON_VOLT_RELATIONSHIP,
    ATOMIC_MASS_UNIT_HARTREE_RELATIONSHIP,
    ATOMIC_MASS_UNIT_HERTZ_RELATIONSHIP,
    ATOMIC_MASS_UNIT_INVERSE_METER_RELATIONSHIP,
    ATOMIC_MASS_UNIT_JOULE_RELATIONSHIP,
    ATOMIC_MASS_UNIT_KELVIN_RELATIONSHIP,
    ATOMIC_MASS_UNIT_KILOGRAM_RELATIONSHIP,
    ATOMIC_UNIT_OF_1ST_HYPERPOLARIZABILITY,
    ATOMIC_UNIT_OF_2ND_HYPERPOLARIZABILITY,
    ATOMIC_UNIT_OF_ACTION,
    ATOMIC_UNIT_OF_CHARGE,
    ATOMIC_UNIT_OF_CHARGE_DENSITY,
    ATOMIC_UNIT_OF_CURRENT,
    ATOMIC_UNIT_OF_ELECTRIC_DIPOLE_MOM,
    ATOMIC_UNIT_OF_ELECTRIC_FIELD,
    ATOMIC_UNIT_OF_ELECTRIC_FIELD_GRADIENT,
    ATOMIC_UNIT_OF_ELECTRIC_POLARIZABILITY,
    ATOMIC_UNIT_OF_ELECTRIC_POTENTIAL,
    ATOMIC_UNIT_OF_ELECTRIC_QUADRUPOLE_MOM,
    ATOMIC_UNIT_OF_ENERGY,
    ATOMIC_UNIT_OF_FORCE,
    ATOMIC_UNIT_OF_LENGTH,
    ATOMIC_UNIT_OF_MAG_DIPOLE_MOM,
    ATOMIC_UNIT_OF_MAG_FLUX_DENSITY,
    ATOMIC_UNIT_OF_MAGNETIZABILITY,
    ATOMIC_UNIT_OF_MASS,
    ATOMIC_UNIT_OF_MOMENTUM,
    ATOMIC_UNIT_OF_PERMITTIVITY,
    ATOMIC_UNIT_OF_TIME,
    ATOMIC_UNIT_OF_VELOCITY,
    AVOGADRO_CONSTANT,
    BOHR_MAGNETON,
    BOHR_MAGNETON_IN_EV_T,
    BOHR_MAGNETON_IN_HZ_T,
    BOHR_MAGNETON_IN_INVERSE_METERS_PER_TESLA,
    BOHR_MAGNETON_IN_K_T,
    BOHR_RADIUS,
    BOLTZMANN_CONSTANT,
    BOLTZMANN_CONSTANT_IN_EV_K,
    BOLTZMANN_CONSTANT_IN_HZ_K,
    BOLTZMANN_CONSTANT_IN_INVERSE_METERS_PER_KELVIN,
    CHARACTERISTIC_IMPEDANCE_OF_VACUUM,
    CLASSICAL_ELECTRON_RADIUS,
    COMPTON_WAVELENGTH,
    COMPTON_WAVELENGTH_OVER_2_PI,
    CONDUCTANCE_QUANTUM,
    CONVENTIONAL_VALUE_OF_JOSEPHSON_CONSTANT,
    CONVENTIONAL_VALUE_OF_VON_KLITZING_CONSTANT,
    CU_X_UNIT,
    DEUTERON_ELECTRON_MAG_MOM_RATIO,
    DEUTERON_ELECTRON_MASS_RATIO,
    DEUTERON_G_FACTOR,
    DEUTERON_MAG_MOM,
    DEUTERON_MAG_MOM_TO_BOHR_MAGNETON_RATIO,
    DEUTERON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO,
    DEUTERON_MASS,
    DEUTERON_MASS_ENERGY_EQUIVALENT,
    DEUTERON_MASS_ENERGY_EQUIVALENT_IN_MEV,
    DEUTERON_MASS_IN_U,
    DEUTERON_MOLAR_MASS,
    DEUTERON_NEUTRON_MAG_MOM_RATIO,
    DEUTERON_PROTON_MAG_MOM_RATIO,
    DEUTERON_PROTON_MASS_RATIO,
    DEUTERON_RMS_CHARGE_RADIUS,
    ELECTRIC_CONSTANT,
    ELECTRON_CHARGE_TO_MASS_QUOTIENT,
    ELECTRON_DEUTERON_MAG_MOM_RATIO,
    ELECTRON_DEUTERON_MASS_RATIO,
    ELECTRON_G_FACTOR,
    ELECTRON_GYROMAG_RATIO,
    ELECTRON_GYROMAG_RATIO_OVER_2_PI,
    ELECTRON_MAG_MOM,
    ELECTRON_MAG_MOM_ANOMALY,
    ELECTRON_MAG_MOM_TO_BOHR_MAGNETON_RATIO,
    ELECTRON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO,
    ELECTRON_MASS,
    ELECTRON_MASS_ENERGY_EQUIVALENT,
    ELECTRON_MASS_ENERGY_EQUIVALENT_IN_MEV,
    ELECTRON_MASS_IN_U,
    ELECTRON_MOLAR_MASS,
    ELECTRON_MUON_MAG_MOM_RATIO,
    ELECTRON_MUON_MASS_RATIO,
    ELECTRON_NEUTRON_MAG_MOM_RATIO,
    ELECTRON_NEUTRON_MASS_RATIO,
    ELECTRON_PROTON_MAG_MOM_RATIO,
    ELECTRON_PROTON_MASS_RATIO,
    ELECTRON_TAU_MASS_RATIO,
    ELECTRON_TO_ALPHA_PARTICLE_MASS_RATIO,
    ELECTRON_TO_SHIELDED_HELION_MAG_MOM_RATIO,
    ELECTRON_TO_SHIELDED_PROTON_MAG_MOM_RATIO,
    ELECTRON_VOLT,
    ELECTRON_VOLT_ATOMIC_MASS_UNIT_RELATIONSHIP,
    ELECTRON_VOLT_HARTREE_RELATIONSHIP,
    ELECTRON_VOLT_HERTZ_RELATIONSHIP,
    ELECTRON_VOLT_INVERSE_METER_RELATIONSHIP,
    ELECTRON_VOLT_JOULE_RELATIONSHIP,
    ELECTRON_VOLT_KELVIN_RELATIONSHIP,
    ELECTRON_VOLT_KILOGRAM_RELATIONSHIP,
    ELEMENTARY_CHARGE,
    ELEMENTARY_CHARGE_OVER_H,
    FARADAY_CONSTANT,
    FARADAY_CONSTANT_FOR_CONVENTIONAL_ELECTRIC_CURRENT,
    FERMI_COUPLING_CONSTANT,
    FINE_STRUCTURE_CONSTANT,
    FIRST_RADIATION_CONSTANT,
    FIRST_RADIATION_CONSTANT_FOR_SPECTRAL_RADIANCE,
    HARTREE_ATOMIC_MASS_UNIT_RELATIONSHIP,
    HARTREE_ELECTRON_VOLT_RELATIONSHIP,
    HARTREE_ENERGY,
    HARTREE_ENERGY_IN_EV,
    HARTREE_HERTZ_RELATIONSHIP,
    HARTREE_INVERSE_METER_RELATIONSHIP,
    HARTREE_JOULE_RELATIONSHIP,
    HARTREE_KELVIN_RELATIONSHIP,
    HARTREE_KILOGRAM_RELATIONSHIP,
    HELION_ELECTRON_MASS_RATIO,
    HELION_MASS,
    HELION_MASS_ENERGY_EQUIVALENT,
    HELION_MASS_ENERGY_EQUIVALENT_IN_MEV,
    HELION_MASS_IN_U,
    HELION_MOLAR_MASS,
    HELION_PROTON_MASS_RATIO,
    HERTZ_ATOMIC_MASS_UNIT_RELATIONSHIP,
    HERTZ_ELECTRON_VOLT_RELATIONSHIP,
    HERTZ_HARTREE_RELATIONSHIP,
    HERTZ_INVERSE_METER_RELATIONSHIP,
    HERTZ_JOULE_RELATIONSHIP,
    HERTZ_KELVIN_RELATIONSHIP,
    HERTZ_KILOGRAM_RELATIONSHIP,
    INVERSE_FINE_STRUCTURE_CONSTANT,
    INVERSE_METER_ATOMIC_MASS_UNIT_RELATIONSHIP,
    INVERSE_METER_ELECTRON_VOLT_RELATIONSHIP,
    INVERSE_METER_HARTREE_RELATIONSHIP,
    INVERSE_METER_HERTZ_RELATIONSHIP,
    INVERSE_METER_JOULE_RELATIONSHIP,
    INVERSE_METER_KELVIN_RELATIONSHIP,
    INVERSE_METER_KILOGRAM_RELATIONSHIP,
    INVERSE_OF_CONDUCTANCE_QUANTUM,
    JOSEPHSON_CONSTANT,
    JOULE_ATOMIC_MASS_UNIT_RELATIONSHIP,
    JOULE_ELECTRON_VOLT_RELATIONSHIP,
    JOULE_HARTREE_RELATIONSHIP,
    JOULE_HERTZ_RELATIONSHIP,
    JOULE_INVERSE_METER_RELATIONSHIP,
    JOULE_KELVIN_RELATIONSHIP,
    JOULE_KILOGRAM_RELATIONSHIP,
    KELVIN_ATOMIC_MASS_UNIT_RELATIONSHIP,
    KELVIN_ELECTRON_VOLT_RELATIONSHIP,
    KELVIN_HARTREE_RELATIONSHIP,
    KELVIN_HERTZ_RELATIONSHIP,
    KELVIN_INVERSE_METER_RELATIONSHIP,
    KELVIN_JOULE_RELATIONSHIP,
    KELVIN_KILOGRAM_RELATIONSHIP,
    KILOGRAM_ATOMIC_MASS_UNIT_RELATIONSHIP,
    KILOGRAM_ELECTRON_VOLT_RELATIONSHIP,
    KILOGRAM_HARTREE_RELATIONSHIP,
    KILOGRAM_HERTZ_RELATIONSHIP,
    KILOGRAM_INVERSE_METER_RELATIONSHIP,
    KILOGRAM_JOULE_RELATIONSHIP,
    KILOGRAM_KELVIN_RELATIONSHIP,
    LATTICE_PARAMETER_OF_SILICON,
    LOSCHMIDT_CONSTANT_27315_K_101325_KPA,
    MAG_CONSTANT,
    MAG_FLUX_QUANTUM,
    MOLAR_GAS_CONSTANT,
    MOLAR_MASS_CONSTANT,
    MOLAR_MASS_OF_CARBON_12,
    MOLAR_PLANCK_CONSTANT,
    MOLAR_PLANCK_CONSTANT_TIMES_C,
    MOLAR_VOLUME_OF_IDEAL_GAS_27315_K_100_KPA,
    MOLAR_VOLUME_OF_IDEAL_GAS_27315_K_101325_KPA,
    MOLAR_VOLUME_OF_SILICON,
    MO_X_UNIT,
    MUON_COMPTON_WAVELENGTH,
    MUON_COMPTON_WAVELENGTH_OVER_2_PI,
    MUON_ELECTRON_MASS_RATIO,
    MUON_G_FACTOR,
    MUON_MAG_MOM,
    MUON_MAG_MOM_ANOMALY,
    MUON_MAG_MOM_TO_BOHR_MAGNETON_RATIO,
    MUON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO,
    MUON_MASS,
    MUON_MASS_ENERGY_EQUIVALENT,
    MUON_MASS_ENERGY_EQUIVALENT_IN_MEV,
    MUON_MASS_IN_U,
    MUON_MOLAR_MASS,
    MUON_NEUTRON_MASS_RATIO,
    MUON_PROTON_MAG_MOM_RATIO,
    MUON_PROTON_MASS_RATIO,
    MUON_TAU_MASS_RATIO,
    NATURAL_UNIT_OF_ACTION,
    NATURAL_UNIT_OF_ACTION_IN_EV_S,
    NATURAL_UNIT_OF_ENERGY,
    NATURAL_UNIT_OF_ENERGY_IN_MEV,
    NATURAL_UNIT_OF_LENGTH,
    NATURAL_UNIT_OF_MASS,
    NATURAL_UNIT_OF_MOMENTUM,
    NATURAL_UNIT_OF_MOMENTUM_IN_MEV_C,
    NATURAL_UNIT_OF_TIME,
    NATURAL_UNIT_OF_VELOCITY,
    NEUTRON_COMPTON_WAVELENGTH,
    NEUTRON_COMPTON_WAVELENGTH_OVER_2_PI,
    NEUTRON_ELECTRON_MAG_MOM_RATIO,
    NEUTRON_ELECTRON_MASS_RATIO,
    NEUTRON_G_FACTOR,
    NEUTRON_GYROMAG_RATIO,
    NEUTRON_GYROMAG_RATIO_OVER_2_PI,
    NEUTRON_MAG_MOM,
    NEUTRON_MAG_MOM_TO_BOHR_MAGNETON_RATIO,
    NEUTRON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO,
    NEUTRON_MASS,
    NEUTRON_MASS_ENERGY_EQUIVALENT,
    NEUTRON_MASS_ENERGY_EQUIVALENT_IN_MEV,
    NEUTRON_MASS_IN_U,
    NEUTRON_MOLAR_MASS,
    NEUTRON_MUON_MASS_RATIO,
    NEUTRON_PROTON_MAG_MOM_RATIO,
    NEUTRON_PROTON_MASS_RATIO,
    NEUTRON_TAU_MASS_RATIO,
    NEUTRON_TO_SHIELDED_PROTON_MAG_MOM_RATIO,
    NEWTONIAN_CONSTANT_OF_GRAVITATION,
    NEWTONIAN_CONSTANT_OF_GRAVITATION_OVER_H_BAR_C,
    NUCLEAR_MAGNETON,
    NUCLEAR_MAGNETON_IN_EV_T,
    NUCLEAR_MAGNETON_IN_INVERSE_METERS_PER_TESLA,
    NUCLEAR_MAGNETON_IN_K_T,
    NUCLEAR_MAGNETON_IN_MHZ_T,
    PLANCK_CONSTANT,
    PLANCK_CONSTANT_IN_EV_S,
    PLANCK_CONSTANT_OVER_2_PI,
    PLANCK_CONSTANT_OVER_2_PI_IN_EV_S,
    PLANCK_CONSTANT_OVER_2_PI_TIMES_C_IN_MEV_FM,
    PLANCK_LENGTH,
    PLANCK_MASS,
    PLANCK_MASS_ENERGY_EQUIVALENT_IN_GEV,
    PLANCK_TEMPERATURE,
    PLANCK_TIME,
    PROTON_CHARGE_TO_MASS_QUOTIENT,
    PROTON_COMPTON_WAVELENGTH,
    PROTON_COMPTON_WAVELENGTH_OVER_2_PI,
    PROTON_ELECTRON_MASS_RATIO,
    PROTON_G_FACTOR,
    PROTON_GYROMAG_RATIO,
    PROTON_GYROMAG_RATIO_OVER_2_PI,
    PROTON_MAG_MOM,
    PROTON_MAG_MOM_TO_BOHR_MAGNETON_RATIO,
    PROTON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO,
    PROTON_MAG_SHIELDING_CORRECTION,
    PROTON_MASS,
    PROTON_MASS_ENERGY_EQUIVALENT,
    PROTON_MASS_ENERGY_EQUIVALENT_IN_MEV,
    PROTON_MASS_IN_U,
    PROTON_MOLAR_MASS,
    PROTON_MUON_MASS_RATIO,
    PROTON_NEUTRON_MAG_MOM_RATIO,
    PROTON_NEUTRON_MASS_RATIO,
    PROTON_RMS_CHARGE_RADIUS,
    PROTON_TAU_MASS_RATIO,
    QUANTUM_OF_CIRCULATION,
    QUANTUM_OF_CIRCULATION_TIMES_2,
    RYDBERG_CONSTANT,
    RYDBERG_CONSTANT_TIMES_C_IN_HZ,
    RYDBERG_CONSTANT_TIMES_HC_IN_EV,
    RYDBERG_CONSTANT_TIMES_HC_IN_J,
    SACKUR_TETRODE_CONSTANT_1_K_100_KPA,
    SACKUR_TETRODE_CONSTANT_1_K_101325_KPA,
    SECOND_RADIATION_CONSTANT,
    SHIELDED_HELION_GYROMAG_RATIO,
    SHIELDED_HELION_GYROMAG_RATIO_OVER_2_PI,
    SHIELDED_HELION_MAG_MOM,
    SHIELDED_HELION_MAG_MOM_TO_BOHR_MAGNETON_RATIO,
    SHIELDED_HELION_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO,
    SHIELDED_HELION_TO_PROTON_MAG_MOM_RATIO,
    SHIELDED_HELION_TO_SHIELDED_PROTON_MAG_MOM_RATIO,
    SHIELDED_PROTON_GYROMAG_RATIO,
    SHIELDED_PROTON_GYROMAG_RATIO_OVER_2_PI,
    SHIELDED_PROTON_MAG_MOM,
    SHIELDED_PROTON_MAG_MOM_TO_BOHR_MAGNETON_RATIO,
    SHIELDED_PROTON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO,
    SPEED_OF_LIGHT_IN_VACUUM,
    STANDARD_ACCELERATION_OF_GRAVITY,
    STANDARD_ATMOSPHERE,
    STEFAN_BOLTZMANN_CONSTANT,
    TAU_COMPTON_WAVELENGTH,
    TAU_COMPTON_WAVELENGTH_OVER_2_PI,
    TAU_ELECTRON_MASS_RATIO,
    TAU_MASS,
    TAU_MASS_ENERGY_EQUIVALENT,
    TAU_MASS_ENERGY_EQUIVALENT_IN_MEV,
    TAU_MASS_IN_U,
    TAU_MOLAR_MASS,
    TAU_MUON_MASS_RATIO,
    TAU_NEUTRON_MASS_RATIO,
    TAU_PROTON_MASS_RATIO,
    THOMSON_CROSS_SECTION,
    TRITON_ELECTRON_MAG_MOM_RATIO,
    TRITON_ELECTRON_MASS_RATIO,
    TRITON_G_FACTOR,
    TRITON_MAG_MOM,
    TRITON_MAG_MOM_TO_BOHR_MAGNETON_RATIO,
    TRITON_MAG_MOM_TO_NUCLEAR_MAGNETON_RATIO,
    TRITON_MASS,
    TRITON_MASS_ENERGY_EQUIVALENT,
    TRITON_MASS_ENERGY_EQUIVALENT_IN_MEV,
    TRITON_MASS_IN_U,
    TRITON_MOLAR_MASS,
    TRITON_NEUTRON_MAG_MOM_RATIO,
    TRITON_PROTON_MAG_MOM_RATIO,
    TRITON_PROTON_MASS_RATIO,
    UNIFIED_ATOMIC_MASS_UNIT,
    VON_KLITZING_CONSTANT,
    WEAK_MIXING_ANGLE,
    WIEN_FREQUENCY_DISPLACEMENT_LAW_CONSTANT,
    WIEN_WAVELENGTH_DISPLACEMENT_LAW_CONSTANT,
];
