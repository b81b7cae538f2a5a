//! Embedded administrative hierarchy sample.
//!
//! Provinces are complete (the 34 provinces in effect before the 2022
//! Papua split). Regencies cover ten provinces. Districts and villages are
//! a small sample taken from a handful of cities; nationally there are
//! roughly 7,000 districts and 83,000 villages, far more than is worth
//! compiling into the binary.

use wilayah_region_models::RegionId;

/// `(code, name)` for every province.
pub const PROVINCES: &[(RegionId, &str)] = &[
    (11, "ACEH"),
    (12, "SUMATERA UTARA"),
    (13, "SUMATERA BARAT"),
    (14, "RIAU"),
    (15, "JAMBI"),
    (16, "SUMATERA SELATAN"),
    (17, "BENGKULU"),
    (18, "LAMPUNG"),
    (19, "KEPULAUAN BANGKA BELITUNG"),
    (21, "KEPULAUAN RIAU"),
    (31, "DKI JAKARTA"),
    (32, "JAWA BARAT"),
    (33, "JAWA TENGAH"),
    (34, "DI YOGYAKARTA"),
    (35, "JAWA TIMUR"),
    (36, "BANTEN"),
    (51, "BALI"),
    (52, "NUSA TENGGARA BARAT"),
    (53, "NUSA TENGGARA TIMUR"),
    (61, "KALIMANTAN BARAT"),
    (62, "KALIMANTAN TENGAH"),
    (63, "KALIMANTAN SELATAN"),
    (64, "KALIMANTAN TIMUR"),
    (65, "KALIMANTAN UTARA"),
    (71, "SULAWESI UTARA"),
    (72, "SULAWESI TENGAH"),
    (73, "SULAWESI SELATAN"),
    (74, "SULAWESI TENGGARA"),
    (75, "GORONTALO"),
    (76, "SULAWESI BARAT"),
    (81, "MALUKU"),
    (82, "MALUKU UTARA"),
    (91, "PAPUA BARAT"),
    (94, "PAPUA"),
];

/// `(code, province code, name)` for the sampled regencies.
pub const REGENCIES: &[(RegionId, RegionId, &str)] = &[
    // Aceh
    (1101, 11, "KABUPATEN SIMEULUE"),
    (1102, 11, "KABUPATEN ACEH SINGKIL"),
    (1103, 11, "KABUPATEN ACEH SELATAN"),
    (1104, 11, "KABUPATEN ACEH TENGGARA"),
    (1105, 11, "KABUPATEN ACEH TIMUR"),
    (1106, 11, "KABUPATEN ACEH TENGAH"),
    (1107, 11, "KABUPATEN ACEH BARAT"),
    (1108, 11, "KABUPATEN ACEH BESAR"),
    (1109, 11, "KABUPATEN PIDIE"),
    (1110, 11, "KABUPATEN BIREUEN"),
    (1111, 11, "KABUPATEN ACEH UTARA"),
    (1112, 11, "KABUPATEN ACEH BARAT DAYA"),
    (1113, 11, "KABUPATEN GAYO LUES"),
    (1114, 11, "KABUPATEN ACEH TAMIANG"),
    (1115, 11, "KABUPATEN NAGAN RAYA"),
    (1116, 11, "KABUPATEN ACEH JAYA"),
    (1117, 11, "KABUPATEN BENER MERIAH"),
    (1118, 11, "KABUPATEN PIDIE JAYA"),
    (1171, 11, "KOTA BANDA ACEH"),
    (1172, 11, "KOTA SABANG"),
    (1173, 11, "KOTA LANGSA"),
    (1174, 11, "KOTA LHOKSEUMAWE"),
    (1175, 11, "KOTA SUBULUSSALAM"),
    // Sumatera Utara
    (1201, 12, "KABUPATEN NIAS"),
    (1202, 12, "KABUPATEN MANDAILING NATAL"),
    (1203, 12, "KABUPATEN TAPANULI SELATAN"),
    (1204, 12, "KABUPATEN TAPANULI TENGAH"),
    (1205, 12, "KABUPATEN TAPANULI UTARA"),
    (1206, 12, "KABUPATEN TOBA SAMOSIR"),
    (1207, 12, "KABUPATEN LABUHAN BATU"),
    (1208, 12, "KABUPATEN ASAHAN"),
    (1209, 12, "KABUPATEN SIMALUNGUN"),
    (1210, 12, "KABUPATEN DAIRI"),
    (1211, 12, "KABUPATEN KARO"),
    (1212, 12, "KABUPATEN DELI SERDANG"),
    (1213, 12, "KABUPATEN LANGKAT"),
    (1214, 12, "KABUPATEN NIAS SELATAN"),
    (1215, 12, "KABUPATEN HUMBANG HASUNDUTAN"),
    (1216, 12, "KABUPATEN PAKPAK BHARAT"),
    (1217, 12, "KABUPATEN SAMOSIR"),
    (1218, 12, "KABUPATEN SERDANG BEDAGAI"),
    (1219, 12, "KABUPATEN BATU BARA"),
    (1220, 12, "KABUPATEN PADANG LAWAS UTARA"),
    (1221, 12, "KABUPATEN PADANG LAWAS"),
    (1222, 12, "KABUPATEN LABUHAN BATU SELATAN"),
    (1223, 12, "KABUPATEN LABUHAN BATU UTARA"),
    (1224, 12, "KABUPATEN NIAS UTARA"),
    (1225, 12, "KABUPATEN NIAS BARAT"),
    (1271, 12, "KOTA SIBOLGA"),
    (1272, 12, "KOTA TANJUNG BALAI"),
    (1273, 12, "KOTA PEMATANG SIANTAR"),
    (1274, 12, "KOTA TEBING TINGGI"),
    (1275, 12, "KOTA MEDAN"),
    (1276, 12, "KOTA BINJAI"),
    (1277, 12, "KOTA PADANGSIDIMPUAN"),
    (1278, 12, "KOTA GUNUNGSITOLI"),
    // Sumatera Barat
    (1301, 13, "KABUPATEN KEPULAUAN MENTAWAI"),
    (1302, 13, "KABUPATEN PESISIR SELATAN"),
    (1303, 13, "KABUPATEN SOLOK"),
    (1304, 13, "KABUPATEN SIJUNJUNG"),
    (1305, 13, "KABUPATEN TANAH DATAR"),
    (1306, 13, "KABUPATEN PADANG PARIAMAN"),
    (1307, 13, "KABUPATEN AGAM"),
    (1308, 13, "KABUPATEN LIMA PULUH KOTA"),
    (1309, 13, "KABUPATEN PASAMAN"),
    (1310, 13, "KABUPATEN SOLOK SELATAN"),
    (1311, 13, "KABUPATEN DHARMASRAYA"),
    (1312, 13, "KABUPATEN PASAMAN BARAT"),
    (1371, 13, "KOTA PADANG"),
    (1372, 13, "KOTA SOLOK"),
    (1373, 13, "KOTA SAWAH LUNTO"),
    (1374, 13, "KOTA PADANG PANJANG"),
    (1375, 13, "KOTA BUKITTINGGI"),
    (1376, 13, "KOTA PAYAKUMBUH"),
    (1377, 13, "KOTA PARIAMAN"),
    // DKI Jakarta
    (3101, 31, "KABUPATEN KEPULAUAN SERIBU"),
    (3171, 31, "KOTA JAKARTA SELATAN"),
    (3172, 31, "KOTA JAKARTA TIMUR"),
    (3173, 31, "KOTA JAKARTA PUSAT"),
    (3174, 31, "KOTA JAKARTA BARAT"),
    (3175, 31, "KOTA JAKARTA UTARA"),
    // Jawa Barat
    (3201, 32, "KABUPATEN BOGOR"),
    (3202, 32, "KABUPATEN SUKABUMI"),
    (3203, 32, "KABUPATEN CIANJUR"),
    (3204, 32, "KABUPATEN BANDUNG"),
    (3205, 32, "KABUPATEN GARUT"),
    (3206, 32, "KABUPATEN TASIKMALAYA"),
    (3207, 32, "KABUPATEN CIAMIS"),
    (3208, 32, "KABUPATEN KUNINGAN"),
    (3209, 32, "KABUPATEN CIREBON"),
    (3210, 32, "KABUPATEN MAJALENGKA"),
    (3211, 32, "KABUPATEN SUMEDANG"),
    (3212, 32, "KABUPATEN INDRAMAYU"),
    (3213, 32, "KABUPATEN SUBANG"),
    (3214, 32, "KABUPATEN PURWAKARTA"),
    (3215, 32, "KABUPATEN KARAWANG"),
    (3216, 32, "KABUPATEN BEKASI"),
    (3217, 32, "KABUPATEN BANDUNG BARAT"),
    (3218, 32, "KABUPATEN PANGANDARAN"),
    (3271, 32, "KOTA BOGOR"),
    (3272, 32, "KOTA SUKABUMI"),
    (3273, 32, "KOTA BANDUNG"),
    (3274, 32, "KOTA CIREBON"),
    (3275, 32, "KOTA BEKASI"),
    (3276, 32, "KOTA DEPOK"),
    (3277, 32, "KOTA CIMAHI"),
    (3278, 32, "KOTA TASIKMALAYA"),
    (3279, 32, "KOTA BANJAR"),
    // Jawa Tengah
    (3301, 33, "KABUPATEN CILACAP"),
    (3302, 33, "KABUPATEN BANYUMAS"),
    (3303, 33, "KABUPATEN PURBALINGGA"),
    (3304, 33, "KABUPATEN BANJARNEGARA"),
    (3305, 33, "KABUPATEN KEBUMEN"),
    (3306, 33, "KABUPATEN PURWOREJO"),
    (3307, 33, "KABUPATEN WONOSOBO"),
    (3308, 33, "KABUPATEN MAGELANG"),
    (3309, 33, "KABUPATEN BOYOLALI"),
    (3310, 33, "KABUPATEN KLATEN"),
    (3311, 33, "KABUPATEN SUKOHARJO"),
    (3312, 33, "KABUPATEN WONOGIRI"),
    (3313, 33, "KABUPATEN KARANGANYAR"),
    (3314, 33, "KABUPATEN SRAGEN"),
    (3315, 33, "KABUPATEN GROBOGAN"),
    (3316, 33, "KABUPATEN BLORA"),
    (3317, 33, "KABUPATEN REMBANG"),
    (3318, 33, "KABUPATEN PATI"),
    (3319, 33, "KABUPATEN KUDUS"),
    (3320, 33, "KABUPATEN JEPARA"),
    (3321, 33, "KABUPATEN DEMAK"),
    (3322, 33, "KABUPATEN SEMARANG"),
    (3323, 33, "KABUPATEN TEMANGGUNG"),
    (3324, 33, "KABUPATEN KENDAL"),
    (3325, 33, "KABUPATEN BATANG"),
    (3326, 33, "KABUPATEN PEKALONGAN"),
    (3327, 33, "KABUPATEN PEMALANG"),
    (3328, 33, "KABUPATEN TEGAL"),
    (3329, 33, "KABUPATEN BREBES"),
    (3371, 33, "KOTA MAGELANG"),
    (3372, 33, "KOTA SURAKARTA"),
    (3373, 33, "KOTA SALATIGA"),
    (3374, 33, "KOTA SEMARANG"),
    (3375, 33, "KOTA PEKALONGAN"),
    (3376, 33, "KOTA TEGAL"),
    // DI Yogyakarta
    (3401, 34, "KABUPATEN KULON PROGO"),
    (3402, 34, "KABUPATEN BANTUL"),
    (3403, 34, "KABUPATEN GUNUNG KIDUL"),
    (3404, 34, "KABUPATEN SLEMAN"),
    (3471, 34, "KOTA YOGYAKARTA"),
    // Jawa Timur
    (3501, 35, "KABUPATEN PACITAN"),
    (3502, 35, "KABUPATEN PONOROGO"),
    (3503, 35, "KABUPATEN TRENGGALEK"),
    (3504, 35, "KABUPATEN TULUNGAGUNG"),
    (3505, 35, "KABUPATEN BLITAR"),
    (3506, 35, "KABUPATEN KEDIRI"),
    (3507, 35, "KABUPATEN MALANG"),
    (3508, 35, "KABUPATEN LUMAJANG"),
    (3509, 35, "KABUPATEN JEMBER"),
    (3510, 35, "KABUPATEN BANYUWANGI"),
    (3511, 35, "KABUPATEN BONDOWOSO"),
    (3512, 35, "KABUPATEN SITUBONDO"),
    (3513, 35, "KABUPATEN PROBOLINGGO"),
    (3514, 35, "KABUPATEN PASURUAN"),
    (3515, 35, "KABUPATEN SIDOARJO"),
    (3516, 35, "KABUPATEN MOJOKERTO"),
    (3517, 35, "KABUPATEN JOMBANG"),
    (3518, 35, "KABUPATEN NGANJUK"),
    (3519, 35, "KABUPATEN MADIUN"),
    (3520, 35, "KABUPATEN MAGETAN"),
    (3521, 35, "KABUPATEN NGAWI"),
    (3522, 35, "KABUPATEN BOJONEGORO"),
    (3523, 35, "KABUPATEN TUBAN"),
    (3524, 35, "KABUPATEN LAMONGAN"),
    (3525, 35, "KABUPATEN GRESIK"),
    (3526, 35, "KABUPATEN BANGKALAN"),
    (3527, 35, "KABUPATEN SAMPANG"),
    (3528, 35, "KABUPATEN PAMEKASAN"),
    (3529, 35, "KABUPATEN SUMENEP"),
    (3571, 35, "KOTA KEDIRI"),
    (3572, 35, "KOTA BLITAR"),
    (3573, 35, "KOTA MALANG"),
    (3574, 35, "KOTA PROBOLINGGO"),
    (3575, 35, "KOTA PASURUAN"),
    (3576, 35, "KOTA MOJOKERTO"),
    (3577, 35, "KOTA MADIUN"),
    (3578, 35, "KOTA SURABAYA"),
    (3579, 35, "KOTA BATU"),
    // Banten
    (3601, 36, "KABUPATEN PANDEGLANG"),
    (3602, 36, "KABUPATEN LEBAK"),
    (3603, 36, "KABUPATEN TANGERANG"),
    (3604, 36, "KABUPATEN SERANG"),
    (3671, 36, "KOTA TANGERANG"),
    (3672, 36, "KOTA CILEGON"),
    (3673, 36, "KOTA SERANG"),
    (3674, 36, "KOTA TANGERANG SELATAN"),
    // Bali
    (5101, 51, "KABUPATEN JEMBRANA"),
    (5102, 51, "KABUPATEN TABANAN"),
    (5103, 51, "KABUPATEN BADUNG"),
    (5104, 51, "KABUPATEN GIANYAR"),
    (5105, 51, "KABUPATEN KLUNGKUNG"),
    (5106, 51, "KABUPATEN BANGLI"),
    (5107, 51, "KABUPATEN KARANG ASEM"),
    (5108, 51, "KABUPATEN BULELENG"),
    (5171, 51, "KOTA DENPASAR"),
];

/// `(code, regency code, name)` for the sampled districts.
pub const DISTRICTS: &[(RegionId, RegionId, &str)] = &[
    // Kota Jakarta Selatan
    (3_171_010, 3171, "JAGAKARSA"),
    (3_171_020, 3171, "PASAR MINGGU"),
    (3_171_030, 3171, "CILANDAK"),
    (3_171_040, 3171, "PESANGGRAHAN"),
    (3_171_050, 3171, "KEBAYORAN LAMA"),
    (3_171_060, 3171, "KEBAYORAN BARU"),
    (3_171_070, 3171, "MAMPANG PRAPATAN"),
    (3_171_080, 3171, "PANCORAN"),
    (3_171_090, 3171, "TEBET"),
    (3_171_100, 3171, "SETIA BUDI"),
    // Kota Jakarta Pusat
    (3_173_010, 3173, "TANAH ABANG"),
    (3_173_020, 3173, "MENTENG"),
    (3_173_030, 3173, "SENEN"),
    (3_173_040, 3173, "JOHAR BARU"),
    (3_173_050, 3173, "CEMPAKA PUTIH"),
    (3_173_060, 3173, "KEMAYORAN"),
    (3_173_070, 3173, "SAWAH BESAR"),
    (3_173_080, 3173, "GAMBIR"),
    // Kota Bandung
    (3_273_010, 3273, "BANDUNG KULON"),
    (3_273_020, 3273, "BABAKAN CIPARAY"),
    (3_273_030, 3273, "BOJONGLOA KALER"),
    (3_273_040, 3273, "BOJONGLOA KIDUL"),
    (3_273_050, 3273, "ASTANAANYAR"),
    (3_273_060, 3273, "REGOL"),
    // Kota Yogyakarta
    (3_471_010, 3471, "MANTRIJERON"),
    (3_471_020, 3471, "KRATON"),
    (3_471_030, 3471, "MERGANGSAN"),
    (3_471_040, 3471, "UMBULHARJO"),
    (3_471_050, 3471, "KOTAGEDE"),
    (3_471_060, 3471, "GONDOKUSUMAN"),
    (3_471_070, 3471, "DANUREJAN"),
    (3_471_080, 3471, "PAKUALAMAN"),
    (3_471_090, 3471, "GONDOMANAN"),
    (3_471_100, 3471, "NGAMPILAN"),
    (3_471_110, 3471, "WIROBRAJAN"),
    (3_471_120, 3471, "GEDONG TENGEN"),
    (3_471_130, 3471, "JETIS"),
    (3_471_140, 3471, "TEGALREJO"),
    // Kota Denpasar
    (5_171_010, 5171, "DENPASAR SELATAN"),
    (5_171_020, 5171, "DENPASAR TIMUR"),
    (5_171_030, 5171, "DENPASAR BARAT"),
    (5_171_031, 5171, "DENPASAR UTARA"),
];

/// `(code, district code, name)` for the sampled villages.
pub const VILLAGES: &[(RegionId, RegionId, &str)] = &[
    // Jagakarsa
    (3_171_010_001, 3_171_010, "CIPEDAK"),
    (3_171_010_002, 3_171_010, "SRENGSENG SAWAH"),
    (3_171_010_003, 3_171_010, "CIGANJUR"),
    (3_171_010_004, 3_171_010, "JAGAKARSA"),
    (3_171_010_005, 3_171_010, "LENTENG AGUNG"),
    (3_171_010_006, 3_171_010, "TANJUNG BARAT"),
    // Menteng
    (3_173_020_001, 3_173_020, "MENTENG"),
    (3_173_020_002, 3_173_020, "PEGANGSAAN"),
    (3_173_020_003, 3_173_020, "CIKINI"),
    (3_173_020_004, 3_173_020, "GONDANGDIA"),
    (3_173_020_005, 3_173_020, "KEBON SIRIH"),
    // Gambir
    (3_173_080_001, 3_173_080, "GAMBIR"),
    (3_173_080_002, 3_173_080, "KEBON KELAPA"),
    (3_173_080_003, 3_173_080, "PETOJO UTARA"),
    (3_173_080_004, 3_173_080, "DURI PULO"),
    (3_173_080_005, 3_173_080, "CIDENG"),
    (3_173_080_006, 3_173_080, "PETOJO SELATAN"),
    // Kraton
    (3_471_020_001, 3_471_020, "PATEHAN"),
    (3_471_020_002, 3_471_020, "PANEMBAHAN"),
    (3_471_020_003, 3_471_020, "KADIPATEN"),
    // Umbulharjo
    (3_471_040_001, 3_471_040, "GIWANGAN"),
    (3_471_040_002, 3_471_040, "SOROSUTAN"),
    (3_471_040_003, 3_471_040, "PANDEYAN"),
    (3_471_040_004, 3_471_040, "WARUNGBOTO"),
    (3_471_040_005, 3_471_040, "TAHUNAN"),
    (3_471_040_006, 3_471_040, "MUJAMUJU"),
    (3_471_040_007, 3_471_040, "SEMAKI"),
    // Denpasar Selatan
    (5_171_010_001, 5_171_010, "SESETAN"),
    (5_171_010_002, 5_171_010, "SIDAKARYA"),
    (5_171_010_003, 5_171_010, "PANJER"),
    (5_171_010_004, 5_171_010, "RENON"),
    (5_171_010_005, 5_171_010, "SANUR"),
    (5_171_010_006, 5_171_010, "SERANGAN"),
];
