//! Hand-curated coordinates for high-traffic airports.
//!
//! Entries are `(code, latitude, longitude)` in decimal degrees. Coverage is
//! intentionally narrower than the airport directory.

pub(crate) const BUILTIN_COORDINATES: &[(&str, f64, f64)] = &[
    ("KJFK", 40.6413, -73.7781),
    ("KLAX", 34.0522, -118.2437),
    ("KORD", 41.9742, -87.9073),
    ("KATL", 33.6407, -84.4277),
    ("KDFW", 32.8998, -97.0403),
    ("KDEN", 39.8561, -104.6737),
    ("KSFO", 37.6213, -122.3790),
    ("KSEA", 47.4502, -122.3088),
    ("KMIA", 25.7959, -80.2870),
    ("KBOS", 42.3656, -71.0096),
    ("KIAD", 38.9531, -77.4565),
    ("KEWR", 40.6895, -74.1745),
    ("KPHX", 33.4342, -112.0116),
    ("KLAS", 36.0840, -115.1537),
    ("KMSP", 44.8831, -93.2218),
    ("KDTW", 42.2162, -83.3554),
    ("KPHL", 39.8719, -75.2411),
    ("KCLT", 35.2144, -80.9473),
    ("KHOU", 29.6454, -95.2789),
    ("KIAH", 29.9902, -95.3368),
    ("KSLC", 40.7899, -111.9791),
    ("KBWI", 39.1774, -76.6684),
    ("KSAN", 32.7338, -117.1933),
    ("KPDX", 45.5898, -122.5951),
    ("KSTL", 38.7487, -90.3700),
    ("KMCI", 39.2976, -94.7139),
    ("KAUS", 30.1945, -97.6699),
    ("KMSY", 29.9934, -90.2581),
    ("KBNA", 36.1245, -86.6782),
    ("KRDU", 35.8776, -78.7875),
    ("KTPA", 27.9755, -82.5332),
    ("KMCO", 28.4312, -81.3083),
    ("KFLL", 26.0726, -80.1528),
    ("KMDW", 41.7868, -87.7522),
    ("KISP", 40.7952, -73.1002),
    ("KBDL", 41.9389, -72.6832),
    ("KPVD", 41.7326, -71.4204),
    ("KBUF", 42.9405, -78.7322),
    ("KROC", 43.1189, -77.6724),
    ("KSYR", 43.1112, -76.1063),
    ("KALB", 42.7483, -73.8017),
    ("KBUR", 34.2006, -118.3587),
    ("KONT", 34.0560, -117.6012),
    ("KSNA", 33.6757, -117.8682),
    ("KSJC", 37.3626, -121.9290),
    ("KOAK", 37.7213, -122.2207),
    ("KSMO", 34.0158, -118.4513),
    ("KPAO", 37.4611, -122.1150),
    ("KNUQ", 37.4161, -122.0491),
    ("KSQL", 37.5119, -122.2495),
    ("KHAF", 37.5134, -122.5011),
    ("KMRY", 36.5870, -121.8429),
    ("KSBA", 34.4262, -119.8404),
    ("KSBP", 35.2370, -120.6424),
    ("KSMF", 38.6954, -121.5908),
    ("KFAT", 36.7762, -119.7181),
    ("KBFL", 35.4336, -119.0568),
    ("KMMH", 37.6241, -119.0820),
    ("KTVL", 38.8939, -119.9953),
    ("KRNO", 39.4993, -119.7681),
    ("KBOI", 43.5644, -116.2228),
    ("KPDT", 45.6950, -118.8414),
    ("KYKM", 46.5682, -120.5440),
    ("KGEG", 47.6199, -117.5338),
    ("KBLI", 48.7928, -122.5375),
    ("KPSC", 46.2647, -119.1190),
    ("KALW", 46.0949, -118.2880),
    ("KPUW", 46.7439, -117.1096),
    ("KMSO", 46.9163, -114.0906),
    ("KBZN", 45.7775, -111.1525),
    ("KBIL", 45.8077, -108.5429),
    ("KGTF", 47.4820, -111.3707),
    ("KHLN", 46.6068, -111.9827),
    ("KBIS", 46.7727, -100.7460),
    ("KFAR", 46.9207, -96.8158),
    ("KGFK", 47.9493, -97.1761),
    ("KDLH", 46.8421, -92.1936),
    ("KINL", 48.5662, -93.4031),
    ("KBJI", 47.5107, -94.9337),
    ("KBRD", 46.3983, -94.1381),
    ("KFCM", 44.8272, -93.4571),
    ("KANE", 45.1450, -93.2114),
    ("KSTP", 44.9345, -93.0600),
    ("KLGA", 40.7769, -73.8740),
    ("KBTV", 44.4728, -73.1515),
    ("KHPN", 41.0670, -73.7076),
    ("KSWF", 41.5041, -74.1048),
    ("KITH", 42.4910, -76.4584),
    ("KBGM", 42.2087, -75.9798),
    ("KELM", 42.1599, -76.8916),
    ("KERI", 42.0822, -80.1762),
    ("KAVP", 41.3385, -75.7234),
    ("KABE", 40.6524, -75.4408),
    ("KMDT", 40.1935, -76.7634),
    ("KIPT", 41.2417, -76.9211),
    ("KUNV", 40.8493, -77.8487),
    ("KAGC", 40.3544, -79.9302),
    ("KCAK", 40.9161, -81.4422),
    ("KCLE", 41.4117, -81.8498),
    ("KCMH", 39.9980, -82.8919),
    ("KDAY", 39.9024, -84.2194),
    ("KCVG", 39.0488, -84.6678),
    ("KIND", 39.7173, -86.2944),
    ("KSDF", 38.1741, -85.7365),
    ("KLEX", 38.0365, -84.6059),
    ("KDCA", 38.8512, -77.0402),
    ("KRIC", 37.5052, -77.3197),
    ("KORF", 36.8946, -76.2012),
    ("KROA", 37.3255, -79.9754),
    ("KCHO", 38.1386, -78.4529),
    ("KSAV", 32.1276, -81.2021),
    ("KCHS", 32.8986, -80.0405),
    ("KMYR", 33.6797, -78.9283),
    ("KILM", 34.2706, -77.9026),
    ("KFAY", 34.9912, -78.8803),
    ("KGSO", 36.0978, -79.9373),
    ("KAVL", 35.4362, -82.5418),
    ("KTYS", 35.8110, -83.9940),
    ("KCHA", 35.0353, -85.2038),
    ("KMEM", 35.0424, -89.9767),
    ("KBHM", 33.5629, -86.7535),
    ("KMGM", 32.3006, -86.3939),
    ("KMOB", 30.6912, -88.2428),
    ("KPNS", 30.4734, -87.1866),
    ("KTLH", 30.3965, -84.3503),
    ("KJAX", 30.4941, -81.6879),
    ("KGNV", 29.6901, -82.2718),
    ("KECP", 30.3573, -85.7954),
    ("KPFN", 30.2121, -85.6828),
    ("KRSW", 26.5362, -81.7552),
    ("KPBI", 26.6832, -80.0956),
    ("KSRQ", 27.3954, -82.5544),
    ("KPIE", 27.9108, -82.6874),
    ("KDSM", 41.5340, -93.6631),
    ("KCID", 41.8847, -91.7108),
    ("KMLI", 41.4485, -90.5075),
    ("KMSN", 43.1399, -89.3375),
    ("KGRB", 44.4851, -88.1296),
    ("KATW", 44.2581, -88.5191),
    ("KEAU", 44.8658, -91.4843),
    ("KRST", 43.9083, -92.5000),
    ("KOMA", 41.3032, -95.8941),
    ("KLNK", 40.8510, -96.7592),
    ("KICT", 37.6499, -97.4331),
    ("KTUL", 36.1984, -95.8881),
    ("KOKC", 35.3931, -97.6007),
    ("KABQ", 35.0402, -106.6092),
    ("KELP", 31.8073, -106.3776),
    ("KMAF", 31.9425, -102.2019),
    ("KAMA", 35.2194, -101.7059),
    ("KLBB", 33.6636, -101.8228),
    ("KCRP", 27.7704, -97.5012),
    ("KBRO", 25.9068, -97.4259),
    ("KHRL", 26.2285, -97.6544),
    ("KLRD", 27.5438, -99.4615),
    ("KMFE", 26.1758, -98.2386),
    ("KOGD", 41.1959, -112.0131),
    ("KPVU", 40.2193, -111.7233),
    ("KCDC", 37.7010, -113.0989),
    ("KSGU", 37.0364, -113.5103),
    ("KIDA", 43.5146, -112.0708),
    ("KPIH", 42.9098, -112.5961),
    ("KCOU", 38.8181, -92.2196),
    ("KSGF", 37.2457, -93.3886),
    ("KJLN", 37.1518, -94.4983),
    ("KFSD", 43.5820, -96.7419),
    ("KRAP", 43.8773, -103.0577),
    ("KABR", 45.4491, -98.4218),
    ("KLGB", 33.8177, -118.1516),
    ("KVNY", 34.2098, -118.4900),
    ("KOXR", 34.2008, -119.2072),
    ("KSCK", 37.8942, -121.2383),
    ("KVIS", 36.3187, -119.3929),
    ("KMOD", 37.6258, -120.9544),
    ("KEUG", 44.1246, -123.2119),
    ("KRDM", 44.2541, -121.1500),
    ("KBFI", 47.5300, -122.3020),
    ("KPAE", 47.9063, -122.2816),
    ("PANC", 61.1744, -149.9964),
    ("PAFA", 64.8151, -147.8560),
    ("PAJN", 58.3544, -134.5761),
    ("PASI", 57.0471, -135.3616),
    ("PAKT", 55.3556, -131.7137),
    ("PHNL", 21.3206, -157.9242),
    ("PHOG", 20.8986, -156.4306),
    ("PHKO", 19.7388, -156.0456),
    ("PHLI", 21.9759, -159.3389),
    ("TJSJ", 18.4394, -66.0018),
    ("EGLL", 51.4700, -0.4543),
    ("LFPG", 49.0097, 2.5479),
    ("EDDF", 50.0379, 8.5622),
    ("LEMD", 40.4839, -3.5680),
    ("LIRF", 41.8045, 12.2509),
    ("EHAM", 52.3105, 4.7683),
    ("EBBR", 50.9014, 4.4844),
    ("LSZH", 47.4647, 8.5492),
    ("LOWW", 48.1103, 16.5697),
    ("EKCH", 55.6180, 12.6560),
    ("ESSA", 59.6519, 17.9186),
    ("ENGM", 60.1939, 11.1004),
    ("EFHK", 60.3172, 24.9633),
    ("UUEE", 55.9726, 37.4146),
    ("UUDD", 55.4086, 37.9061),
    ("UUWW", 55.5915, 37.2615),
    ("ULLI", 59.8003, 30.2625),
    ("UAAA", 43.3522, 77.0405),
    ("UAKK", 51.0222, 71.4669),
    ("RJTT", 35.5494, 139.7798),
    ("RJAA", 35.7647, 140.3863),
    ("RKSI", 37.4602, 126.4407),
    ("ZSPD", 31.1434, 121.8052),
    ("ZBAA", 40.0801, 116.5846),
    ("VHHH", 22.3080, 113.9185),
    ("WSSS", 1.3644, 103.9915),
    ("WMKK", 2.7456, 101.7099),
    ("VTBS", 13.6811, 100.7473),
    ("WMKP", 6.1667, 100.4014),
    ("WMKJ", 1.6413, 103.6699),
    ("WMKH", 6.1894, 100.3981),
    ("WMKU", 6.3297, 99.7286),
    ("OMDB", 25.2532, 55.3657),
    ("OJAI", 24.4330, 54.6511),
    ("OEDF", 24.9533, 46.7253),
    ("OBBI", 26.2708, 50.6336),
    ("OKBK", 29.2267, 47.9689),
    ("OTHH", 25.2731, 51.6081),
    ("FAOR", -26.1367, 28.2411),
    ("FACT", -33.9648, 18.6017),
    ("HECA", 30.1127, 31.4000),
    ("SBGR", -23.4321, -46.4692),
    ("SBSP", -23.6267, -46.6553),
    ("SBRJ", -22.8089, -43.2436),
    ("SBCF", -19.6244, -43.9719),
    ("SBBR", -15.8711, -47.9186),
    ("SBFL", -27.6702, -48.5525),
    ("SBFI", -25.6000, -54.4833),
    ("SBCG", -20.4686, -54.6725),
    ("SBPV", -8.1264, -34.9236),
    ("SBSV", -12.9106, -38.3311),
    ("SBFN", -3.7763, -38.5322),
    ("SBEG", -3.0386, -60.0497),
    ("SBKP", -23.0075, -47.1344),
    ("SBPA", -30.0000, -51.1767),
    ("SBCY", -15.6529, -56.1167),
    ("SBBE", -1.3792, -48.4761),
    ("SBMQ", -0.0500, -51.0722),
    ("SBSL", -2.5850, -44.2342),
    ("SBTB", -2.8983, -40.3361),
    ("SBJP", -7.1458, -34.9483),
    ("SBNT", -5.9114, -35.2478),
    ("SBMK", -5.7681, -35.8961),
    ("SBAX", -19.5631, -46.9603),
    ("SBUL", -18.8836, -48.2256),
    ("SBBH", -19.8519, -43.9506),
    ("SBCR", -19.6244, -43.9719),
    ("SBCZ", -7.6000, -72.7667),
    ("SBTT", -4.2556, -69.9358),
    ("SBTF", -3.3828, -64.7242),
    ("SBPB", -2.8944, -41.7319),
    ("SBTE", -5.5319, -42.8233),
    ("YSSY", -33.9399, 151.1753),
    ("YMML", -37.6733, 144.8433),
    ("YBBN", -27.3842, 153.1175),
    ("YPPH", -31.9403, 115.9669),
    ("YSCB", -35.3069, 149.1925),
    ("YPDN", -12.4083, 130.8725),
    ("YBAD", -34.9450, 138.5306),
    ("YBCG", -28.1642, 153.5047),
    ("YBCS", -16.8858, 145.7553),
    ("YBRM", -20.7019, 115.4011),
    ("YBTL", -19.2525, 146.7653),
    ("YBMA", -23.3819, 150.4753),
    ("YBRK", -23.3819, 150.4753),
    ("YBSU", -26.6033, 153.0919),
    ("YBHM", -20.3581, 148.9517),
    ("CYYZ", 43.6772, -79.6306),
    ("CYVR", 49.1947, -123.1792),
    ("CYUL", 45.4577, -73.7497),
    ("CYYC", 51.1139, -114.0203),
    ("CYEG", 53.3097, -113.5797),
    ("CYOW", 45.3225, -75.6692),
    ("CYHZ", 44.8808, -63.5086),
    ("CYQB", 46.7911, -71.3933),
    ("CYQX", 48.9369, -54.5681),
    ("MMMX", 19.4363, -99.0721),
    ("MMUN", 21.0365, -86.8771),
    ("MMGL", 20.5218, -103.3112),
    ("MMTJ", 32.5411, -116.9700),
    ("MMVR", 19.1450, -96.1875),
    ("MMMY", 25.7785, -100.1069),
    ("MMZT", 23.1614, -106.2661),
    ("MMLP", 24.0725, -110.3625),
    ("MMML", 20.9375, -89.6578),
    ("MMCU", 28.7025, -105.9644),
];
