//! Fixed condition texts keyed to rule identity.

use hema_model::DiagnosticCandidate;

/// Name, explanation and recommendations reported for one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub name: &'static str,
    pub explanation: &'static str,
    pub recommendations: &'static [&'static str],
}

impl Condition {
    /// Build a candidate for this condition.
    pub fn candidate(&self, rule: &str, probability: f64) -> DiagnosticCandidate {
        DiagnosticCandidate::new(
            rule,
            self.name,
            probability,
            self.explanation,
            self.recommendations,
        )
    }
}

pub const MICROCYTIC_ANEMIA: Condition = Condition {
    name: "Anemia Mikrositik",
    explanation: "Anemia dengan sel darah merah yang lebih kecil dari normal.",
    recommendations: &[
        "Konsultasikan dengan dokter untuk evaluasi lebih lanjut",
        "Tes kadar ferritin dan besi untuk memeriksa anemia defisiensi besi",
        "Pertimbangkan suplemen besi jika direkomendasikan oleh dokter",
    ],
};

pub const MACROCYTIC_ANEMIA: Condition = Condition {
    name: "Anemia Makrositik",
    explanation: "Anemia dengan sel darah merah yang lebih besar dari normal, sering dikaitkan dengan defisiensi vitamin B12 atau asam folat.",
    recommendations: &[
        "Konsultasikan dengan dokter untuk evaluasi lebih lanjut",
        "Tes kadar vitamin B12 dan asam folat",
        "Evaluasi fungsi tiroid",
    ],
};

pub const NORMOCYTIC_ANEMIA: Condition = Condition {
    name: "Anemia Normositik",
    explanation: "Anemia dengan ukuran sel darah merah normal, bisa disebabkan oleh penyakit kronis atau kehilangan darah.",
    recommendations: &[
        "Konsultasikan dengan dokter untuk evaluasi lebih lanjut",
        "Periksa adanya sumber perdarahan",
        "Evaluasi fungsi ginjal dan hati",
    ],
};

pub const IRON_DEFICIENCY_ANEMIA: Condition = Condition {
    name: "Anemia Defisiensi Besi",
    explanation: "Hemoglobin rendah disertai MCV dan MCH rendah, pola yang khas untuk kekurangan zat besi.",
    recommendations: &[
        "Konsultasikan dengan dokter untuk evaluasi lebih lanjut",
        "Tes ferritin, serum besi, dan TIBC untuk konfirmasi",
        "Evaluasi sumber kehilangan darah kronis, termasuk saluran cerna",
        "Pertimbangkan suplemen besi sesuai anjuran dokter",
    ],
};

pub const MEGALOBLASTIC_ANEMIA: Condition = Condition {
    name: "Anemia Megaloblastik",
    explanation: "Hemoglobin rendah dengan MCV di atas 100 fL, mengarah pada defisiensi vitamin B12 atau asam folat.",
    recommendations: &[
        "Tes kadar vitamin B12 dan asam folat",
        "Pemeriksaan apusan darah tepi",
        "Konsultasikan dengan hematologis",
    ],
};

pub const POLYCYTHEMIA: Condition = Condition {
    name: "Polisitemia",
    explanation: "Kondisi dimana tubuh memproduksi terlalu banyak sel darah merah, menyebabkan darah menjadi lebih kental.",
    recommendations: &[
        "Segera konsultasikan dengan hematologis",
        "Pertimbangkan tes JAK2 untuk polisitemia vera",
        "Evaluasi saturasi oksigen untuk memeriksa penyebab sekunder",
    ],
};

pub const ERYTHROCYTOSIS_POLYCYTHEMIA: Condition = Condition {
    name: "Polisitemia",
    explanation: "Jumlah eritrosit, hemoglobin, dan hematokrit meningkat bersamaan, menunjukkan produksi sel darah merah berlebih.",
    recommendations: &[
        "Segera konsultasikan dengan hematologis",
        "Pertimbangkan tes JAK2 dan kadar eritropoietin",
        "Evaluasi saturasi oksigen, riwayat merokok, dan tempat tinggal di dataran tinggi",
    ],
};

pub const LEUKOCYTOSIS: Condition = Condition {
    name: "Leukositosis",
    explanation: "Peningkatan jumlah sel darah putih, sering kali mengindikasikan infeksi atau peradangan.",
    recommendations: &[
        "Evaluasi adanya sumber infeksi",
        "Pemeriksaan diferensial leukosit",
        "Pertimbangkan tes CRP atau laju endap darah",
    ],
};

pub const LEUKOPENIA: Condition = Condition {
    name: "Leukopenia",
    explanation: "Penurunan jumlah sel darah putih, bisa mengindikasikan masalah dengan sumsum tulang atau autoimun.",
    recommendations: &[
        "Konsultasikan dengan hematologis",
        "Evaluasi riwayat obat-obatan",
        "Tes autoimun sesuai rekomendasi dokter",
    ],
};

pub const THROMBOCYTOPENIA: Condition = Condition {
    name: "Trombositopenia",
    explanation: "Penurunan jumlah trombosit/keping darah, yang bisa meningkatkan risiko perdarahan.",
    recommendations: &[
        "Pantau tanda-tanda perdarahan",
        "Konsultasikan dengan hematologis",
        "Evaluasi kemungkinan penyebab seperti obat-obatan atau infeksi",
    ],
};

pub const THROMBOCYTOSIS: Condition = Condition {
    name: "Trombositosis",
    explanation: "Peningkatan jumlah trombosit/keping darah, bisa reaktif atau disebabkan oleh gangguan sumsum tulang.",
    recommendations: &[
        "Evaluasi penyebab peradangan atau infeksi",
        "Pertimbangkan pemeriksaan sumsum tulang jika persisten",
        "Pantau untuk gejala pembekuan darah",
    ],
};

pub const NEUTROPHILIA: Condition = Condition {
    name: "Neutrofilia",
    explanation: "Persentase neutrofil meningkat, sering berkaitan dengan infeksi bakteri atau peradangan akut.",
    recommendations: &[
        "Evaluasi tanda-tanda infeksi bakteri",
        "Pertimbangkan tes CRP atau prokalsitonin",
        "Tinjau penggunaan kortikosteroid",
    ],
};

pub const LYMPHOCYTOSIS: Condition = Condition {
    name: "Limfositosis",
    explanation: "Persentase limfosit meningkat, sering terlihat pada infeksi virus.",
    recommendations: &[
        "Evaluasi kemungkinan infeksi virus",
        "Ulangi hitung jenis leukosit dalam 2-4 minggu",
        "Konsultasikan dengan dokter jika menetap",
    ],
};

pub const EOSINOPHILIA: Condition = Condition {
    name: "Eosinofilia",
    explanation: "Persentase eosinofil meningkat, dapat berkaitan dengan alergi atau infeksi parasit.",
    recommendations: &[
        "Evaluasi riwayat alergi dan asma",
        "Pemeriksaan feses untuk infeksi parasit",
        "Tinjau obat-obatan yang baru digunakan",
    ],
};

pub const NON_SPECIFIC: Condition = Condition {
    name: "Abnormalitas Darah Non-spesifik",
    explanation: "Parameter darah abnormal terdeteksi tetapi tidak cocok dengan pola penyakit spesifik.",
    recommendations: &[
        "Ulangi tes dalam 2-4 minggu untuk konfirmasi",
        "Konsultasikan dengan dokter jika gejala muncul",
        "Pertimbangkan evaluasi lebih lanjut jika hasil tetap abnormal",
    ],
};

pub const NORMAL: Condition = Condition {
    name: "Hasil Normal",
    explanation: "Semua parameter darah berada dalam rentang normal.",
    recommendations: &[
        "Lanjutkan pemeriksaan rutin sesuai rekomendasi dokter",
        "Pertahankan gaya hidup sehat",
        "Lakukan tes ulang dalam 6-12 bulan",
    ],
};
