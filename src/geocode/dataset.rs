//! Built-in reference table for the province of Córdoba, Argentina.
//!
//! Keys are pre-normalized (lowercase, accent-stripped, ñ folded to n) and
//! coordinates are approximate locality centers. Several keys may point at
//! the same place (alternate spellings); that is expected.

/// (normalized name, latitude, longitude)
pub const CORDOBA_PLACES: &[(&str, f64, f64)] = &[
    // Main cities
    ("cordoba", -31.4201, -64.1888),
    ("rio cuarto", -33.1307, -64.3499),
    ("villa maria", -32.4074, -63.2429),
    ("san francisco", -31.4281, -62.0828),
    ("carlos paz", -31.4241, -64.4979),
    ("villa carlos paz", -31.4241, -64.4979),
    ("alta gracia", -31.6596, -64.4298),
    ("rio tercero", -32.1737, -64.1144),
    ("jesus maria", -30.9816, -64.0953),
    ("bell ville", -32.6277, -62.6889),
    ("cruz del eje", -30.7269, -64.8063),
    ("marcos juarez", -32.6908, -62.1057),
    ("villa del rosario", -31.5607, -63.5349),
    ("cosquin", -31.2436, -64.4664),
    ("dean funes", -30.4268, -64.3507),
    ("la carlota", -33.4178, -63.2967),
    ("villa dolores", -31.9442, -65.1890),
    ("la calera", -31.3439, -64.3347),
    ("santa rosa de calamuchita", -32.0669, -64.5364),
    ("laboulaye", -34.1269, -63.3911),
    ("villa huidobro", -34.8389, -64.5833),
    // Mid-size localities
    ("santa rosa de rio primero", -31.1530, -63.4075),
    ("villa del totoral", -30.8142, -64.0031),
    ("villa cura brochero", -31.7064, -65.0186),
    ("villa tulumba", -30.3994, -64.1269),
    ("san francisco del chanar", -29.7881, -63.9442),
    ("villa de maria", -29.8983, -63.7178),
    ("salsacate", -31.3167, -65.0833),
    ("san carlos minas", -31.1750, -65.0917),
    ("la falda", -31.0905, -64.4930),
    ("villa giardino", -31.0397, -64.5006),
    ("huerta grande", -31.0716, -64.4903),
    ("unquillo", -31.2308, -64.3142),
    ("rio ceballos", -31.1656, -64.3239),
    ("saldan", -31.3069, -64.3142),
    ("villa allende", -31.2944, -64.2958),
    ("mendiolaza", -31.2592, -64.3003),
    ("almafuerte", -32.1919, -64.2492),
    ("embalse", -32.1833, -64.4167),
    ("pilar", -31.6756, -63.8825),
    ("morteros", -30.7139, -62.0044),
    ("brinkmann", -30.8661, -62.0389),
    ("portena", -31.0133, -62.0686),
    ("general baldissera", -33.1200, -62.3000),
    ("justiniano posse", -32.8833, -62.6833),
    ("canals", -33.5633, -62.8861),
    ("general cabrera", -32.8192, -63.8756),
    ("general deheza", -32.7544, -63.7900),
    ("villa general belgrano", -31.9792, -64.5564),
    ("los reartes", -31.9061, -64.5856),
    ("villa de soto", -30.8558, -64.9942),
    ("villa nueva", -32.4333, -63.2500),
    ("laguna larga", -31.7817, -63.7967),
    ("quilino", -30.2167, -64.5000),
    ("san javier", -31.9833, -65.0500),
    ("yacanto", -32.0333, -65.1000),
    // Other localities
    ("mina clavero", -31.7217, -65.0050),
    ("nono", -31.7833, -65.0167),
    ("las varillas", -31.8667, -62.7167),
    ("oncativo", -31.9167, -63.6833),
    ("monte cristo", -31.3500, -63.9500),
    ("corral de bustos", -33.2833, -62.1833),
    ("oliva", -32.0333, -63.5667),
    ("capilla del monte", -30.8569, -64.5264),
    ("san jose de la dormida", -30.3500, -63.9500),
    ("arroyito", -31.4167, -63.0500),
    ("las perdices", -32.7000, -63.7000),
    ("devoto", -31.4000, -62.3000),
    ("adelia maria", -33.6333, -64.0167),
    ("coronel moldes", -33.6167, -64.6000),
    ("sampacho", -33.3833, -64.7167),
    ("alcira", -34.0333, -64.3833),
    ("vicuna mackenna", -33.9167, -64.3833),
    ("huinca renanco", -34.8333, -64.3667),
    ("mattaldi", -34.4833, -64.2000),
];
