//! Localized label strings and quest templates.
//!
//! The locale governs quest text and the toast labels handed to the
//! presentation layer. Engine log templates are deliberately not
//! localized and stay in one fixed language.

use questline_types::{Locale, QuestDefinition};

use crate::content::ids;

/// Label strings the engine needs when composing toasts.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    /// Subtitle on achievement toasts.
    pub achievement_unlocked: &'static str,
    /// Title prefix on level-up toasts (the level number is appended).
    pub level_up: &'static str,
    /// Subtitle prefix on quest-completion toasts.
    pub quest_complete: &'static str,
    /// Subtitle on the contact-form confirmation toast.
    pub sent_success: &'static str,
}

/// Look up the label strings for a locale.
pub fn strings(locale: Locale) -> Strings {
    match locale {
        Locale::En => Strings {
            achievement_unlocked: "Achievement Unlocked",
            level_up: "Level Up!",
            quest_complete: "Quest Complete",
            sent_success: "Transmission sent. I will respond shortly.",
        },
        Locale::Tr => Strings {
            achievement_unlocked: "Başarım Açıldı",
            level_up: "Seviye Atladın!",
            quest_complete: "Görev Tamamlandı",
            sent_success: "İleti gönderildi. En kısa sürede dönüş yapacağım.",
        },
        Locale::Es => Strings {
            achievement_unlocked: "Logro Desbloqueado",
            level_up: "¡Subiste de Nivel!",
            quest_complete: "Misión Completada",
            sent_success: "Transmisión enviada. Responderé pronto.",
        },
        Locale::Zh => Strings {
            achievement_unlocked: "成就解锁",
            level_up: "升级！",
            quest_complete: "任务完成",
            sent_success: "传输已发送，我会尽快回复。",
        },
        Locale::Hi => Strings {
            achievement_unlocked: "उपलब्धि अनलॉक",
            level_up: "स्तर बढ़ा!",
            quest_complete: "क्वेस्ट पूर्ण",
            sent_success: "संदेश भेज दिया गया। मैं जल्द जवाब दूँगा।",
        },
        Locale::Ar => Strings {
            achievement_unlocked: "تم فتح إنجاز",
            level_up: "ارتقاء مستوى!",
            quest_complete: "اكتملت المهمة",
            sent_success: "تم إرسال الرسالة. سأرد قريباً.",
        },
    }
}

/// The builtin quest line for a locale.
///
/// Ids, order, targets, and rewards are identical across locales; only the
/// title and description change, so progress can be carried over
/// position-by-position when the display language switches.
pub fn quest_templates(locale: Locale) -> Vec<QuestDefinition> {
    let texts: [(&str, &str); 3] = match locale {
        Locale::En => [
            ("Automation Initiate", "Run the automation suite once."),
            ("Pest Control", "Squash all three UI bugs."),
            ("Cartographer", "Open every view in the workspace."),
        ],
        Locale::Tr => [
            ("Otomasyon Çaylağı", "Otomasyon paketini bir kez çalıştır."),
            ("Haşere Kontrolü", "Üç arayüz hatasının hepsini ez."),
            ("Haritacı", "Çalışma alanındaki her görünümü aç."),
        ],
        Locale::Es => [
            (
                "Recluta de Automatización",
                "Ejecuta la suite de automatización una vez.",
            ),
            ("Control de Plagas", "Aplasta los tres bugs de la interfaz."),
            ("Cartógrafo", "Abre todas las vistas del espacio de trabajo."),
        ],
        Locale::Zh => [
            ("自动化新兵", "运行一次自动化测试套件。"),
            ("除虫行动", "消灭全部三个界面漏洞。"),
            ("制图师", "打开工作区的每个视图。"),
        ],
        Locale::Hi => [
            ("स्वचालन रंगरूट", "ऑटोमेशन सूट एक बार चलाएँ।"),
            ("कीट नियंत्रण", "तीनों UI बग मिटाएँ।"),
            ("मानचित्रकार", "कार्यक्षेत्र का हर दृश्य खोलें।"),
        ],
        Locale::Ar => [
            ("مجنّد الأتمتة", "شغّل حزمة الاختبارات مرة واحدة."),
            ("مكافحة الحشرات", "اسحق أخطاء الواجهة الثلاثة."),
            ("رسّام الخرائط", "افتح كل عرض في مساحة العمل."),
        ],
    };

    let [suite, bugs, explore] = texts;
    vec![
        QuestDefinition {
            id: ids::QUEST_SUITE.to_string(),
            title: suite.0.to_string(),
            description: suite.1.to_string(),
            target: 1,
            reward_xp: 150,
        },
        QuestDefinition {
            id: ids::QUEST_BUGS.to_string(),
            title: bugs.0.to_string(),
            description: bugs.1.to_string(),
            target: 3,
            reward_xp: 300,
        },
        QuestDefinition {
            id: ids::QUEST_EXPLORE.to_string(),
            title: explore.0.to_string(),
            description: explore.1.to_string(),
            target: 5,
            reward_xp: 500,
        },
    ]
}
