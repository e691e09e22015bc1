//! Season-keyed relative population weights for the FluView atoms.
//!
//! Weights are imputed from published wILI rather than census estimates,
//! rounded to eight decimal places upstream; stored here as exact integers
//! scaled by 1e8 so row normalization stays in rational arithmetic.
//!
//! One table per season (the year containing epiweek 40). Atoms absent from
//! a season's table (e.g. `pr` before 2013) were not reporting that season.

/// Denominator shared by every entry in [`SEASON_WEIGHTS`].
pub const WEIGHT_SCALE: u64 = 100_000_000;

/// `(season, [(atom, weight_scaled)])`, seasons ascending, atoms sorted.
pub const SEASON_WEIGHTS: &[(i32, &[(&str, u64)])] = &[
    (2010, &[
        ("ak", 227518),
        ("al", 1533745),
        ("ar", 941176),
        ("az", 2148400),
        ("ca", 12039274),
        ("co", 1636543),
        ("ct", 1146016),
        ("dc", 195314),
        ("de", 288299),
        ("fl", 6038341),
        ("ga", 3201648),
        ("hi", 421877),
        ("ia", 979696),
        ("id", 503527),
        ("il", 4205408),
        ("in", 2092240),
        ("jfk", 2733469),
        ("ks", 918118),
        ("ky", 1405184),
        ("la", 1463192),
        ("ma", 2147752),
        ("md", 1856371),
        ("me", 429419),
        ("mi", 3247482),
        ("mn", 1715415),
        ("mo", 1950239),
        ("ms", 961546),
        ("mt", 317556),
        ("nc", 3055618),
        ("nd", 210670),
        ("ne", 585185),
        ("nh", 431464),
        ("nj", 2836354),
        ("nm", 654612),
        ("nv", 860921),
        ("ny_minus_jfk", 3631738),
        ("oh", 3759897),
        ("ok", 1200984),
        ("or", 1246166),
        ("pa", 4105459),
        ("ri", 343073),
        ("sc", 1485699),
        ("sd", 264588),
        ("tn", 2050899),
        ("tx", 8072283),
        ("ut", 906917),
        ("va", 2567430),
        ("vt", 202532),
        ("wa", 2170791),
        ("wi", 1841977),
        ("wv", 592713),
        ("wy", 177260),
    ]),
    (2011, &[
        ("ak", 229505),
        ("al", 1547462),
        ("ar", 943623),
        ("az", 2070624),
        ("ca", 12068005),
        ("co", 1632952),
        ("ct", 1153898),
        ("dc", 195012),
        ("de", 291042),
        ("fl", 6087038),
        ("ga", 3136422),
        ("hi", 440658),
        ("ia", 987440),
        ("id", 506529),
        ("il", 4159759),
        ("in", 2102140),
        ("jfk", 2639945),
        ("ks", 924801),
        ("ky", 1404776),
        ("la", 1467032),
        ("ma", 2113917),
        ("md", 1871206),
        ("me", 428860),
        ("mi", 3204299),
        ("mn", 1719550),
        ("mo", 1941239),
        ("ms", 960674),
        ("mt", 321277),
        ("nc", 3087160),
        ("nd", 218381),
        ("ne", 591985),
        ("nh", 425016),
        ("nj", 2839098),
        ("nm", 666356),
        ("nv", 874816),
        ("ny_minus_jfk", 3617721),
        ("oh", 3740244),
        ("ok", 1213960),
        ("or", 1237936),
        ("pa", 4116837),
        ("ri", 339827),
        ("sc", 1497568),
        ("sd", 264368),
        ("tn", 2054620),
        ("tx", 8137335),
        ("ut", 897433),
        ("va", 2593179),
        ("vi", 34350),
        ("vt", 202018),
        ("wa", 2172891),
        ("wi", 1843688),
        ("wv", 600521),
        ("wy", 183008),
    ]),
    (2012, &[
        ("ak", 231819),
        ("al", 1540851),
        ("ar", 942543),
        ("az", 2079732),
        ("ca", 12092341),
        ("co", 1641994),
        ("ct", 1148834),
        ("dc", 198275),
        ("de", 291038),
        ("fl", 6114108),
        ("ga", 3148930),
        ("hi", 441076),
        ("ia", 982549),
        ("id", 508404),
        ("il", 4128530),
        ("in", 2090667),
        ("jfk", 2644989),
        ("ks", 921252),
        ("ky", 1401796),
        ("la", 1467680),
        ("ma", 2113535),
        ("md", 1869878),
        ("me", 426125),
        ("mi", 3168319),
        ("mn", 1714633),
        ("mo", 1928559),
        ("ms", 955571),
        ("mt", 320334),
        ("nc", 3098006),
        ("nd", 219478),
        ("ne", 591215),
        ("nh", 422915),
        ("nj", 2829857),
        ("nm", 668008),
        ("nv", 873694),
        ("ny_minus_jfk", 3599504),
        ("oh", 3703687),
        ("ok", 1216368),
        ("or", 1241930),
        ("pa", 4088358),
        ("ri", 337286),
        ("sc", 1501189),
        ("sd", 264458),
        ("tn", 2054316),
        ("tx", 8236755),
        ("ut", 904064),
        ("va", 2597622),
        ("vi", 35180),
        ("vt", 200973),
        ("wa", 2190810),
        ("wi", 1832391),
        ("wv", 595245),
        ("wy", 182329),
    ]),
    (2013, &[
        ("ak", 230241),
        ("al", 1517830),
        ("ar", 928298),
        ("az", 2062798),
        ("ca", 11974465),
        ("co", 1633128),
        ("ct", 1130065),
        ("dc", 199037),
        ("de", 288681),
        ("fl", 6080683),
        ("ga", 3122503),
        ("hi", 438272),
        ("ia", 967646),
        ("id", 502290),
        ("il", 4052832),
        ("in", 2057813),
        ("jfk", 2624223),
        ("ks", 908388),
        ("ky", 1378813),
        ("la", 1448562),
        ("ma", 2091874),
        ("md", 1852285),
        ("me", 418369),
        ("mi", 3111046),
        ("mn", 1693229),
        ("mo", 1895510),
        ("ms", 939586),
        ("mt", 316437),
        ("nc", 3069718),
        ("nd", 220253),
        ("ne", 584064),
        ("nh", 415701),
        ("nj", 2790382),
        ("nm", 656480),
        ("nv", 868439),
        ("ny_minus_jfk", 3536077),
        ("oh", 3633856),
        ("ok", 1200804),
        ("or", 1227398),
        ("pa", 4017603),
        ("pr", 1154317),
        ("ri", 330567),
        ("sc", 1486956),
        ("sd", 262349),
        ("tn", 2032259),
        ("tx", 8202735),
        ("ut", 898886),
        ("va", 2576680),
        ("vi", 33496),
        ("vt", 197035),
        ("wa", 2170973),
        ("wi", 1802582),
        ("wv", 584026),
        ("wy", 181457),
    ]),
    (2014, &[
        ("ak", 229826),
        ("al", 1511231),
        ("ar", 925232),
        ("az", 2071714),
        ("ca", 11984244),
        ("co", 1647139),
        ("ct", 1124367),
        ("dc", 202117),
        ("de", 289444),
        ("fl", 6113065),
        ("ga", 3123955),
        ("hi", 438962),
        ("ia", 966159),
        ("id", 504010),
        ("il", 4027598),
        ("in", 2054438),
        ("jfk", 2628095),
        ("ks", 904742),
        ("ky", 1374139),
        ("la", 1446115),
        ("ma", 2092603),
        ("md", 1853664),
        ("me", 415316),
        ("mi", 3093930),
        ("mn", 1694700),
        ("mo", 1889603),
        ("ms", 935160),
        ("mt", 317376),
        ("nc", 3078912),
        ("nd", 226162),
        ("ne", 584164),
        ("nh", 413793),
        ("nj", 2782429),
        ("nm", 651961),
        ("nv", 872335),
        ("ny_minus_jfk", 3515874),
        ("oh", 3617563),
        ("ok", 1203859),
        ("or", 1228678),
        ("pa", 3993758),
        ("pr", 1130270),
        ("ri", 328770),
        ("sc", 1492810),
        ("sd", 264159),
        ("tn", 2030914),
        ("tx", 8268967),
        ("ut", 906940),
        ("va", 2582641),
        ("vi", 33273),
        ("vt", 195921),
        ("wa", 2179514),
        ("wi", 1795467),
        ("wv", 579754),
        ("wy", 182168),
    ]),
    (2015, &[
        ("ak", 222549),
        ("al", 1465046),
        ("ar", 896152),
        ("az", 2033757),
        ("ca", 11723059),
        ("co", 1617926),
        ("ct", 1086707),
        ("dc", 199051),
        ("de", 282642),
        ("fl", 6009969),
        ("ga", 3050535),
        ("hi", 428888),
        ("ia", 938773),
        ("id", 493738),
        ("il", 3891432),
        ("in", 1993020),
        ("jfk", 2565219),
        ("ks", 877424),
        ("ky", 1333317),
        ("la", 1404697),
        ("ma", 2038083),
        ("md", 1805455),
        ("me", 401881),
        ("mi", 2993998),
        ("mn", 1648714),
        ("mo", 1832052),
        ("ms", 904533),
        ("mt", 309194),
        ("nc", 3004141),
        ("nd", 223386),
        ("ne", 568488),
        ("nh", 400892),
        ("nj", 2700323),
        ("nm", 630083),
        ("nv", 857763),
        ("ny_minus_jfk", 5965562),
        ("oh", 3502746),
        ("ok", 1171597),
        ("or", 1199323),
        ("pa", 3862992),
        ("pr", 1072014),
        ("ri", 318804),
        ("sc", 1459964),
        ("sd", 257716),
        ("tn", 1978616),
        ("tx", 8143924),
        ("ut", 888997),
        ("va", 2515309),
        ("vi", 32150),
        ("vt", 189317),
        ("wa", 2133134),
        ("wi", 1739496),
        ("wv", 558998),
        ("wy", 176455),
    ]),
    (2016, &[
        ("ak", 227206),
        ("al", 1495049),
        ("ar", 916311),
        ("az", 2100899),
        ("ca", 12044360),
        ("co", 1679052),
        ("ct", 1104830),
        ("dc", 206836),
        ("de", 291047),
        ("fl", 6237330),
        ("ga", 3143072),
        ("hi", 440484),
        ("ia", 961212),
        ("id", 509207),
        ("il", 3957187),
        ("in", 2036971),
        ("jfk", 2630960),
        ("ks", 895905),
        ("ky", 1361560),
        ("la", 1437120),
        ("ma", 2090476),
        ("md", 1848052),
        ("me", 409015),
        ("mi", 3053260),
        ("mn", 1689232),
        ("mo", 1871922),
        ("ms", 920701),
        ("mt", 317852),
        ("nc", 3090132),
        ("nd", 232914),
        ("ne", 583455),
        ("nh", 409392),
        ("nj", 2756388),
        ("nm", 641636),
        ("nv", 889466),
        ("ny_minus_jfk", 3460203),
        ("oh", 3573599),
        ("ok", 1203489),
        ("or", 1239663),
        ("pa", 3939073),
        ("pr", 1069004),
        ("ri", 324996),
        ("sc", 1506526),
        ("sd", 264163),
        ("tn", 2030874),
        ("tx", 8452051),
        ("ut", 921879),
        ("va", 2579260),
        ("vi", 32227),
        ("vt", 192612),
        ("wa", 2206222),
        ("wi", 1775927),
        ("wv", 567395),
        ("wy", 180349),
    ]),
    (2017, &[
        ("ak", 226985),
        ("al", 1488923),
        ("ar", 914813),
        ("az", 2121906),
        ("ca", 12016114),
        ("co", 1697014),
        ("ct", 1094766),
        ("dc", 208648),
        ("de", 291668),
        ("fl", 6310502),
        ("ga", 3156409),
        ("hi", 437360),
        ("ia", 959975),
        ("id", 514951),
        ("il", 3919113),
        ("in", 2030593),
        ("jfk", 2613827),
        ("ks", 890329),
        ("ky", 1358380),
        ("la", 1433368),
        ("ma", 2085150),
        ("md", 1842029),
        ("me", 407546),
        ("mi", 3039408),
        ("mn", 1689905),
        ("mo", 1865930),
        ("ms", 914998),
        ("mt", 319311),
        ("nc", 3106493),
        ("nd", 232165),
        ("ne", 584048),
        ("nh", 408617),
        ("nj", 2738362),
        ("nm", 637229),
        ("nv", 900122),
        ("ny_minus_jfk", 3431267),
        ("oh", 3555613),
        ("ok", 1200884),
        ("or", 1252378),
        ("pa", 3913594),
        ("pr", 1044379),
        ("ri", 323374),
        ("sc", 1518871),
        ("sd", 265086),
        ("tn", 2036199),
        ("tx", 8529818),
        ("ut", 934570),
        ("va", 2575484),
        ("vi", 31504),
        ("vt", 191183),
        ("wa", 2229756),
        ("wi", 1769118),
        ("wv", 560636),
        ("wy", 179330),
    ]),
];
