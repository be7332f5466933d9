//! Quantity definitions - 15 quantities, ~190 units
//!
//! Hand-curated conversion tables. Concept: the smallest unit of a
//! quantity comes first and is the factor-1 base every other factor is
//! expressed against.

use mensura_core::Number;

use crate::numeral::NumeralBase;
use crate::quantity::{DisplayGroup, GroupTag, Quantity, Unit};
use crate::temperature::TemperatureScale;

pub(crate) fn all() -> Vec<Quantity> {
    vec![
        angle(),
        area(),
        digital(),
        energy(),
        force(),
        fuel(),
        length(),
        mass(),
        numbers(),
        power(),
        pressure(),
        speed(),
        temperature(),
        time(),
        volume(),
    ]
}

fn dec(literal: &str) -> Number {
    Number::from_str(literal).unwrap()
}

fn always(label: &'static str) -> DisplayGroup {
    DisplayGroup { label, tag: GroupTag::Always }
}

fn imperial(label: &'static str) -> DisplayGroup {
    DisplayGroup { label, tag: GroupTag::Imperial }
}

fn legacy(label: &'static str) -> DisplayGroup {
    DisplayGroup { label, tag: GroupTag::Legacy }
}

fn angle() -> Quantity {
    Quantity::linear(
        "angle",
        "Angle",
        vec![always("Unit of measurement")],
        vec![
            Unit::linear("Second, \"", dec("1"), 0),
            Unit::linear("Minute, '", dec("60"), 0),
            Unit::linear("Grad, ^g", dec("3240"), 0),
            Unit::linear("Degree, °", dec("3600"), 0),
            // 648000 = 3600 * 180; radian factor is 648000/pi
            Unit::linear("Radian, rad", dec("206264.80624709636"), 0),
            Unit::linear("Milliradian, mrad", dec("206.26480624709637"), 0),
        ],
    )
}

fn area() -> Quantity {
    Quantity::linear(
        "area",
        "Area",
        vec![
            always("Metric system"),
            imperial("Imperial and US customary systems"),
        ],
        vec![
            // Metric system
            Unit::linear("Square nanometer, nm", dec("1"), 0),
            Unit::linear("Square micrometer μm^2", dec("1E+6"), 0),
            Unit::linear("Square millimeter, mm^2", dec("1E+12"), 0),
            Unit::linear("Square centimeter, cm^2", dec("1E+14"), 0),
            Unit::linear("Square decimeter, dm^2", dec("1E+16"), 0),
            Unit::linear("Square meter, m^2", dec("1E+18"), 0),
            Unit::linear("Square dekameter, dam^2", dec("1E+20"), 0),
            Unit::linear("Are, a", dec("1E+20"), 0),
            Unit::linear("Square hectometer, hm^2", dec("1E+22"), 0),
            Unit::linear("Hectare, ha", dec("1E+22"), 0),
            Unit::linear("Square kilometer, km^2", dec("1E+24"), 0),
            Unit::linear("Square astronomical unit, au^2", dec("2.2379522915281197E+40"), 0),
            // Imperial and US customary systems
            Unit::linear("Square inch, in^2", dec("6.4516E+14"), 1),
            Unit::linear("Square foot, ft^2", dec("92903039999997600"), 1),
            Unit::linear("Square foot (US), ft^2", dec("92903411613275790"), 1).derived(),
            Unit::linear("Square yard, yd^2", dec("836127359999986200"), 1),
            Unit::linear("Acre, ac", dec("4.0468564224E+21"), 1),
            Unit::linear("Acre (US), ac", dec("4.0468726099999997E+21"), 1).derived(),
            Unit::linear("Square mile, mi^2", dec("2.589988110336E+24"), 1),
            Unit::linear("Square mile (US), mi^2", dec("2.58999847031952E+24"), 1).derived(),
        ],
    )
}

fn digital() -> Quantity {
    Quantity::linear(
        "digital",
        "Digital data",
        vec![
            always("Data transfer rates"),
            always("Size of files and data"),
            always("Binary contexts"),
        ],
        vec![
            // Data transfer rates
            Unit::linear("Bit, b", dec("1"), 0),
            Unit::linear("Kilobit, Kb", dec("1E+3"), 0),
            Unit::linear("Megabit, Mb", dec("1E+6"), 0),
            Unit::linear("Gigabit, Gb", dec("1E+9"), 0),
            Unit::linear("Terabit, Tb", dec("1E+12"), 0),
            Unit::linear("Petabit, Pb", dec("1E+15"), 0),
            Unit::linear("Exabit, Eb", dec("1E+18"), 0),
            // Size of files and data
            Unit::linear("Byte, B", dec("8"), 1),
            Unit::linear("Kilobyte, KB", dec("8E+3"), 1),
            Unit::linear("Megabyte, MB", dec("8E+6"), 1),
            Unit::linear("Gigabyte, GB", dec("8E+9"), 1),
            Unit::linear("Terabyte, TB", dec("8E+12"), 1),
            Unit::linear("Petabyte, PB", dec("8E+15"), 1),
            Unit::linear("Exabyte, EB", dec("8E+18"), 1),
            // Binary contexts
            Unit::linear("Kibibyte, KiB", dec("8192"), 2),
            Unit::linear("Mebibyte, MiB", dec("8388608"), 2),
            Unit::linear("Gibibyte, GiB", dec("8589934592"), 2),
            Unit::linear("Tebibyte, TiB", dec("8796093022208"), 2),
            Unit::linear("Pebibyte, PiB", dec("9007199254740992"), 2),
            Unit::linear("Exbibyte, EiB", dec("9223372036854775808"), 2),
        ],
    )
}

fn energy() -> Quantity {
    Quantity::linear(
        "energy",
        "Energy",
        vec![
            always("Joule units"),
            always("Electrical energy"),
            always("Other energy units"),
            imperial("Imperial and US customary systems"),
        ],
        vec![
            // Other energy units
            Unit::linear("Electronvolt, eV", dec("1"), 2),
            Unit::linear("Erg", dec("624150647996.32"), 2),
            Unit::linear("Calorie (th), cal", dec("2.6114463112166E+19"), 2),
            Unit::linear("Calorie (it), cal", dec("2.613193933031E+19"), 2),
            Unit::linear("Kilocalorie (th), kcal", dec("2.6114463112166E+22"), 2),
            Unit::linear("Kilocalorie (it), kcal", dec("2.613193933031E+22"), 2),
            // Joule units
            Unit::linear("Attojoule, aJ", dec("6.2415064799632"), 0),
            Unit::linear("Nanojoule, nJ", dec("6241506479.9632"), 0),
            Unit::linear("Microjoule, μJ", dec("6241506479963.2"), 0),
            Unit::linear("Millijoule, mJ", dec("6241506479963200"), 0),
            Unit::linear("Joule, J", dec("6.2415064799632E+18"), 0),
            Unit::linear("Kilojoule, kJ", dec("6.2415064799632E+21"), 0),
            Unit::linear("Megajoule, MJ", dec("6.2415064799632E+24"), 0),
            Unit::linear("Gigajoule, GJ", dec("6.2415064799632E+27"), 0),
            Unit::linear("Terajoule, TJ", dec("6.2415064799632E+30"), 0),
            // Electrical energy
            Unit::linear("Watt-hour, Wh", dec("2.2469423327868E+22"), 1),
            Unit::linear("Kilowatt-hour, kWh", dec("2.2469423327868E+25"), 1),
            Unit::linear("Megawatt-hour, MWh", dec("2.2469423327868E+28"), 1),
            Unit::linear("Gigawatt-hour, GWh", dec("2.2469423327868E+31"), 1),
            // Imperial and US customary systems
            Unit::linear("Foot-poundal, ft-pdl", dec("2.6301776963136E+17"), 3),
            Unit::linear("Foot-pound, ft⋅lbf", dec("8.4623465101609E+18"), 3),
            Unit::linear("British thermal unit (th), Btu", dec("6.5807342296012E+21"), 3),
            Unit::linear("British thermal unit (it), Btu", dec("6.5851382365734E+21"), 3),
            Unit::linear("Therm (EC), thm", dec("6.5851382365734E+26"), 3),
            Unit::linear("Therm (US), thm", dec("6.5835660010911E+26"), 3),
        ],
    )
}

fn force() -> Quantity {
    Quantity::linear(
        "force",
        "Force",
        vec![
            always("Newton units"),
            always("Other force units"),
            imperial("Imperial and US customary systems"),
            legacy("Legacy units"),
        ],
        vec![
            // Newton units
            Unit::linear("Attonewton, aN", dec("1"), 0),
            Unit::linear("Femtonewton, fN", dec("1E+3"), 0),
            Unit::linear("Piconewton, pN", dec("1E+6"), 0),
            Unit::linear("Nanonewton, nN", dec("1E+9"), 0),
            Unit::linear("Micronewton, μN", dec("1E+12"), 0),
            Unit::linear("Millinewton, mN", dec("1E+15"), 0),
            Unit::linear("Centinewton, cN", dec("1E+16"), 0),
            Unit::linear("Decinewton, dN", dec("1E+17"), 0),
            Unit::linear("Newton, N", dec("1E+18"), 0),
            Unit::linear("Dekanewton, daN", dec("1E+19"), 0),
            Unit::linear("Hectonewton, hN", dec("1E+20"), 0),
            Unit::linear("Kilonewton, kN", dec("1E+21"), 0),
            Unit::linear("Meganewton, MN", dec("1E+24"), 0),
            Unit::linear("Giganewton, GN", dec("1E+27"), 0),
            Unit::linear("Teranewton, TN", dec("1E+30"), 0),
            Unit::linear("Petanewton, PN", dec("1E+33"), 0),
            Unit::linear("Exanewton, EN", dec("1E+36"), 0),
            // Other force units
            Unit::linear("Dyne, dyn", dec("1E+13"), 1),
            Unit::linear("Kilogram-force, kgf", dec("9806650000000272000"), 1),
            Unit::linear("Ton-force (metric), tf", dec("9.80665E+21"), 1),
            // Imperial and US customary systems
            Unit::linear("Poundal, pdl", dec("138254954375999900"), 2),
            Unit::linear("Kip, kip", dec("4.448221615E+21"), 2),
            Unit::linear("Ton-force (short)", dec("8.89644323E+21"), 2),
            Unit::linear("Ton-force (long)", dec("9.964016418E+21"), 2),
            // Legacy units
            Unit::linear("Pond-force, lbf", dec("4448221615254771700"), 3),
        ],
    )
}

fn fuel() -> Quantity {
    Quantity::linear(
        "fuel",
        "Fuel consumption",
        vec![
            always("Metric system"),
            imperial("Imperial and US customary systems"),
        ],
        vec![
            // Metric system
            Unit::linear("Meter per liter, m/L", dec("1"), 0),
            Unit::linear("Kilometer per liter, km/L", dec("1E+3"), 0),
            Unit::linear("Liters per 100 kilometers, L/100 km", dec("1E+5"), 0),
            // Imperial and US customary systems
            Unit::linear("Mile per gallon (US), mpg(us)", dec("425.1437075"), 1),
            Unit::linear("Mile per gallon (UK), mpg(uk)", dec("354.00619"), 1),
        ],
    )
}

fn length() -> Quantity {
    Quantity::linear(
        "length",
        "Length",
        vec![
            always("Metric system"),
            imperial("Imperial and US customary systems"),
            always("Nautical units of length"),
            always("Astronomical distance units"),
        ],
        vec![
            // Metric system
            Unit::linear("Picometer, pm", dec("1"), 0),
            Unit::linear("Nanometer, nm", dec("1E+3"), 0),
            Unit::linear("Micrometer, μm", dec("1E+6"), 0),
            Unit::linear("Millimeter, mm", dec("1E+9"), 0),
            Unit::linear("Centimeter, cm", dec("1E+10"), 0),
            Unit::linear("Decimeter, dm", dec("1E+11"), 0),
            Unit::linear("Meter, m", dec("1E+12"), 0),
            Unit::linear("Kilometer, km", dec("1E+15"), 0),
            // Imperial and US customary systems
            Unit::linear("Inch, in", dec("2.54E+10"), 1),
            Unit::linear("Inch (US), in", dec("25400050800"), 1).derived(),
            Unit::linear("Foot, ft", dec("3.048E+11"), 1),
            Unit::linear("Foot (US), ft", dec("304800609601.21906"), 1).derived(),
            Unit::linear("Yard, yd", dec("9.144E+11"), 1),
            Unit::linear("Mile, mi", dec("1.609344E+15"), 1),
            Unit::linear("Statute mile (US), mi", dec("1609347218694436"), 1).derived(),
            // Nautical units of length
            Unit::linear("Nautical mile, nmi", dec("1.852E+15"), 2),
            // Astronomical distance units
            Unit::linear("Astronomical unit, au", dec("1.4959787069100001E+23"), 3),
            Unit::linear("Light-year, ly", dec("9.4607304725808E+27"), 3),
            Unit::linear("Parsec, pc", dec("3.085677581E+28"), 3),
        ],
    )
}

fn mass() -> Quantity {
    Quantity::linear(
        "mass",
        "Weight and Mass",
        vec![
            always("Metric system"),
            imperial("Imperial and US customary systems"),
            always("Masses of celestial bodies"),
            legacy("Legacy units"),
        ],
        vec![
            // Metric system
            Unit::linear("Microgram, μg", dec("1"), 0),
            Unit::linear("Milligram, mg", dec("1E+3"), 0),
            Unit::linear("Gram, g", dec("1E+6"), 0),
            Unit::linear("Kilogram, kg", dec("1E+9"), 0),
            Unit::linear("Tonne, t", dec("1E+12"), 0),
            Unit::linear("Kiloton, kt", dec("1E+15"), 0),
            // Imperial and US customary systems
            Unit::linear("Grain, gr", dec("64798.91"), 1),
            Unit::linear("Pennyweight, pwt", dec("1555173.84"), 1),
            Unit::linear("Carat, ct", dec("2E+5"), 1),
            Unit::linear("Ounce, oz", dec("28349523.125"), 1),
            Unit::linear("Pound, lbs", dec("453592370"), 1),
            Unit::linear("Hundredweight (US, short), cwt", dec("45359237000"), 1),
            Unit::linear("Hundredweight (UK, long), cwt", dec("50802345440"), 1),
            Unit::linear("Quarter (US), qr", dec("11339809250"), 1),
            Unit::linear("Quarter (UK), qr", dec("12700586360"), 1),
            Unit::linear("Stone, st", dec("6350293180"), 1),
            Unit::linear("Ton (short), ton", dec("907184740000"), 1),
            Unit::linear("Ton (long), ton", dec("1016046908800"), 1),
            // Masses of celestial bodies
            Unit::linear("Moon mass", dec("7.348E+31"), 2),
            Unit::linear("Earth mass", dec("5.9722E+33"), 2),
            Unit::linear("Solar mass", dec("1.988416E+39"), 2),
            // Legacy units
            Unit::linear("Quintal, q", dec("1E+11"), 3),
        ],
    )
}

fn numbers() -> Quantity {
    Quantity::numeral(
        "numbers",
        "Numbers",
        vec![always("Numeral systems")],
        vec![
            Unit::numeral("Decimal", NumeralBase::Decimal, 0),
            Unit::numeral("Hexadecimal", NumeralBase::Hexadecimal, 0),
            Unit::numeral("Octal", NumeralBase::Octal, 0),
            Unit::numeral("Binary", NumeralBase::Binary, 0),
        ],
    )
}

fn power() -> Quantity {
    Quantity::linear(
        "power",
        "Power",
        vec![
            always("Watt-based units"),
            always("Other power units"),
            imperial("Imperial and US customary systems"),
            legacy("Legacy units"),
        ],
        vec![
            // Watt-based units
            Unit::linear("Attowatt, aW", dec("1"), 0),
            Unit::linear("Femtowatt, fW", dec("1E+3"), 0),
            Unit::linear("Picowatt, pW", dec("1E+6"), 0),
            Unit::linear("Nanowatt, nW", dec("1E+9"), 0),
            Unit::linear("Microwatt, µW", dec("1E+12"), 0),
            Unit::linear("Milliwatt, mW", dec("1E+15"), 0),
            Unit::linear("Centiwatt, nW", dec("1E+16"), 0),
            Unit::linear("Deciwatt, dW", dec("1E+17"), 0),
            Unit::linear("Watt, W", dec("1E+18"), 0),
            Unit::linear("Dekawatt, daW", dec("1E+19"), 0),
            Unit::linear("Hectowatt, hW", dec("1E+20"), 0),
            Unit::linear("Kilowatt, kW", dec("1E+21"), 0),
            Unit::linear("Megawatt, MW", dec("1E+24"), 0),
            Unit::linear("Gigawatt, GW", dec("1E+27"), 0),
            Unit::linear("Terawatt, TW", dec("1E+30"), 0),
            Unit::linear("Petawatt, PW", dec("1E+33"), 0),
            Unit::linear("Exawatt, EW", dec("1E+36"), 0),
            // Other power units
            Unit::linear("Erg per second, erg/s", dec("1E+11"), 1),
            Unit::linear("Calorie (it) per hour, cal/h", dec("1163000000000007"), 1),
            Unit::linear("Calorie (it) per second, cal/s", dec("4186799999999929000"), 1),
            Unit::linear("Ton of refrigeration, TR", dec("3.516852842E+21"), 1),
            // Imperial and US customary systems
            Unit::linear("BTU (th) per hour, Btu/h", dec("292874999992899260"), 2),
            Unit::linear("Foot pound-force per hour", dec("376616096758177"), 2),
            Unit::linear("Foot pound-force per second", dec("1355817948329443300"), 2),
            // Legacy units
            Unit::linear("Horsepower (imperial), hp", dec("74569987158227022"), 3),
            Unit::linear("Horsepower (metric), hp", dec("73549875E+13"), 3),
            Unit::linear("Horsepower (electric), hp", dec("746E+18"), 3),
            Unit::linear("Horsepower (boiler), hp", dec("9.8095E+21"), 3),
        ],
    )
}

fn pressure() -> Quantity {
    Quantity::linear(
        "pressure",
        "Pressure",
        vec![
            always("Pascal units"),
            always("Other pressure units"),
            imperial("Imperial and US customary systems"),
        ],
        vec![
            // Pascal units
            Unit::linear("Attopascal, aPa", dec("1"), 0),
            Unit::linear("Femtopascal, fPa", dec("1E+3"), 0),
            Unit::linear("Picopascal, pPa", dec("1E+6"), 0),
            Unit::linear("Nanopascal, nPa", dec("1E+9"), 0),
            Unit::linear("Micropascal, µPa", dec("1E+12"), 0),
            Unit::linear("Millipascal, mPa", dec("1E+15"), 0),
            Unit::linear("Centipascal, cPa", dec("1E+16"), 0),
            Unit::linear("Decipascal, dPa", dec("1E+17"), 0),
            Unit::linear("Pascal, Pa", dec("1E+18"), 0),
            Unit::linear("Dekapascal, daPa", dec("1E+19"), 0),
            Unit::linear("Hectopascal, hPa", dec("1E+20"), 0),
            Unit::linear("Kilopascal, kPa", dec("1E+21"), 0),
            Unit::linear("Standard atmosphere, atm", dec("1.01325E+23"), 0),
            Unit::linear("Megapascal, MPa", dec("1E+24"), 0),
            Unit::linear("Gigapascal, GPa", dec("1E+27"), 0),
            Unit::linear("Terapascal, TPa", dec("1E+30"), 0),
            Unit::linear("Petapascal, PPa", dec("1E+33"), 0),
            Unit::linear("Exapascal, PPa", dec("1E+36"), 0),
            // Other pressure units
            Unit::linear("Millibar, mbar", dec("1E+20"), 1),
            Unit::linear("Millimetre of mercury, mmHg", dec("1.33322387E+20"), 1),
            Unit::linear("Torr", dec("133322368421082810000"), 1),
            Unit::linear("Atmosphere (technical), at", dec("9.80665E+22"), 1),
            Unit::linear("Bar, bar", dec("1E+23"), 1),
            Unit::linear("Atmosphere (standard), atm", dec("1.01325E+23"), 1),
            // Imperial and US customary systems
            Unit::linear("Inch of mercury (60°F), inHg", dec("3.37685E+21"), 2),
            Unit::linear("Inch of mercury (32°F), inHg", dec("3.38638E+21"), 2),
            Unit::linear("Pound per square inch, psi", dec("6.894757293E+21"), 2),
            Unit::linear("Kilopound per square inch, ksi", dec("6.894757293E+24"), 2),
        ],
    )
}

fn speed() -> Quantity {
    Quantity::linear(
        "speed",
        "Speed",
        vec![
            always("Metric system"),
            imperial("Imperial and US customary systems"),
            always("Other speed units"),
        ],
        vec![
            // Metric system
            Unit::linear("Millimeter per Hour, mm/h", dec("1"), 0),
            Unit::linear("Millimeter per Minute, mm/min", dec("60"), 0),
            Unit::linear("Millimeter per Second, mm/s", dec("3600"), 0),
            Unit::linear("Centimeter per Hour, cm/h", dec("10"), 0),
            Unit::linear("Centimeter per Minute, cm/min", dec("600"), 0),
            Unit::linear("Centimeter per Second, cm/s", dec("36000"), 0),
            Unit::linear("Meter per Hour, m/h", dec("1000"), 0),
            Unit::linear("Meter per Minute, m/min", dec("60000"), 0),
            Unit::linear("Meter per Second, m/s", dec("3600000"), 0),
            Unit::linear("Kilometer per Hour, km/h", dec("1000000"), 0),
            Unit::linear("Kilometer per Minute, km/min", dec("60000000"), 0),
            Unit::linear("Kilometer per Second, km/s", dec("3600000000"), 0),
            // Imperial and US customary systems
            Unit::linear("Feet per Hour, ft/h", dec("304.8"), 1),
            Unit::linear("Feet per Minute, ft/min", dec("18288"), 1),
            Unit::linear("Feet per Second, ft/s", dec("1097280"), 1),
            Unit::linear("Yard per Hour, yd/h", dec("914.4"), 1),
            Unit::linear("Yard per Minute, yd/min", dec("54864"), 1),
            Unit::linear("Yard per Second, yd/s", dec("3291840"), 1),
            Unit::linear("Mile per Hour, mi/h", dec("1609344"), 1),
            Unit::linear("Mile per Minute, mi/min", dec("96560640"), 1),
            Unit::linear("Mile per Second, mi/s", dec("5793638400"), 1),
            // Other speed units
            Unit::linear("Knot, kn", dec("1852000"), 2),
            Unit::linear("Mach (SI)", dec("1062167040"), 2),
            Unit::linear("Mach (20°C, 1 atm)", dec("1236960000"), 2),
            Unit::linear("Cosmic velocity - first", dec("28440000000"), 2),
            Unit::linear("Cosmic velocity - second", dec("40320000000"), 2),
            Unit::linear("Cosmic velocity - third", dec("60012000000"), 2),
            Unit::linear("Earth's velocity", dec("107154000000"), 2),
            Unit::linear("Speed of light (vacuum)", dec("1079252848799998"), 2),
        ],
    )
}

fn temperature() -> Quantity {
    Quantity::temperature(
        "temperature",
        "Temperature",
        vec![
            always("SI system"),
            imperial("Imperial and US customary systems"),
            legacy("Legacy units"),
        ],
        vec![
            // SI system
            Unit::temperature("Celsius, °C", TemperatureScale::Celsius, 0),
            Unit::temperature("Kelvin, K", TemperatureScale::Kelvin, 0),
            // Imperial and US customary systems
            Unit::temperature("Fahrenheit, °F", TemperatureScale::Fahrenheit, 1),
            Unit::temperature("Rankine, °R", TemperatureScale::Rankine, 1),
            // Legacy units
            Unit::temperature("Reaumur, °r", TemperatureScale::Reaumur, 2),
        ],
    )
}

fn time() -> Quantity {
    Quantity::linear(
        "time",
        "Time",
        vec![always("Units of time")],
        vec![
            Unit::linear("Attosecond, as", dec("1"), 0),
            Unit::linear("Femtosecond, fs", dec("1E+3"), 0),
            Unit::linear("Picosecond, fs", dec("1E+6"), 0),
            Unit::linear("Nanosecond, ns", dec("1E+9"), 0),
            Unit::linear("Microsecond, μs", dec("1E+12"), 0),
            Unit::linear("Millisecond, ms", dec("1E+15"), 0),
            Unit::linear("Second, s", dec("1E+18"), 0),
            Unit::linear("Minute, min", dec("6E+19"), 0),
            Unit::linear("Hour, h", dec("3.6E+21"), 0),
            Unit::linear("Day, d", dec("8.64E+22"), 0),
            Unit::linear("Week", dec("6.048E+23"), 0),
            Unit::linear("Month", dec("2.628E+24"), 0),
            Unit::linear("Year (365 days), y", dec("3.1535999999999997E+25"), 0),
            Unit::linear("Decade", dec("3.155759999E+26"), 0),
            Unit::linear("Century", dec("3.155759999E+27"), 0),
            Unit::linear("Millennium", dec("3.155759999E+28"), 0),
        ],
    )
}

fn volume() -> Quantity {
    Quantity::linear(
        "volume",
        "Volume",
        vec![
            always("Metric system"),
            imperial("Imperial and US customary systems"),
        ],
        vec![
            // Metric system
            Unit::linear("Cubic millimeter, mm^3", dec("1"), 0),
            Unit::linear("Cubic centimeter, cm^3", dec("1E+3"), 0),
            Unit::linear("Cubic decimeter, dm^3", dec("1E+6"), 0),
            Unit::linear("Cubic meter, m^3", dec("1E+9"), 0),
            Unit::linear("Cubic kilometer, km^3", dec("1E+18"), 0),
            Unit::linear("Milliliter, mL", dec("1E+3"), 0),
            Unit::linear("Liter, L", dec("1E+6"), 0),
            // Imperial and US customary systems
            Unit::linear("Cubic inch, in^3", dec("16387.064"), 1),
            Unit::linear("Cubic foot, ft^3", dec("28316846.592"), 1),
            Unit::linear("Cubic yard, yd^3", dec("764554857.984"), 1),
            Unit::linear("Cubic mile, mi^3", dec("4168181825440539600"), 1),
            Unit::linear("Acre - inch, ac⋅in", dec("102790153129"), 1),
            Unit::linear("Acre - foot, ac⋅ft", dec("1233481837548"), 1),
            Unit::linear("Acre - foot (US), ac⋅ft", dec("1233489238468"), 1),
            Unit::linear("Ounce, oz", dec("28413.0625"), 1),
            Unit::linear("Ounce (US), oz", dec("29573.529562"), 1),
            Unit::linear("Gill, gi", dec("142065.3125"), 1),
            Unit::linear("Gill (US), gi", dec("118294.11825"), 1),
            Unit::linear("Pint, pt", dec("568261.25"), 1),
            Unit::linear("Pint (US), pt", dec("473176.473"), 1),
            Unit::linear("Quart, qt", dec("1136522.5"), 1),
            Unit::linear("Quart (US), qt", dec("946352.946"), 1),
            Unit::linear("Gallon, gal", dec("4546090"), 1),
            Unit::linear("Gallon (US), gal", dec("3785411.784"), 1),
            Unit::linear("Barrel, bbl", dec("163659240"), 1),
            Unit::linear("Barrel (US), bbl", dec("119240471.2"), 1),
            Unit::linear("Barrel (oil), bbl", dec("158987294.93"), 1),
        ],
    )
}
