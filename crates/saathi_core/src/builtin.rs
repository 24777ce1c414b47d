//! Shipped template bank: English, Hindi, Spanish, French.
//!
//! Each language is one function returning a complete [`TemplateBundle`].
//! Variant order is significant (first variant answers mood check-ins).

use crate::category::CategoryTable;
use crate::language::Language;
use crate::mood::{MoodLabel, MoodTable};
use crate::templates::{TemplateBundle, UiStrings};
use std::collections::HashMap;

pub(crate) fn bundle(language: Language) -> TemplateBundle {
    match language {
        Language::English => english(),
        Language::Hindi => hindi(),
        Language::Spanish => spanish(),
        Language::French => french(),
    }
}

pub(crate) fn glyphs() -> HashMap<MoodLabel, String> {
    MoodLabel::ALL
        .into_iter()
        .map(|mood| {
            let glyph = match mood {
                MoodLabel::Happy => "😊",
                MoodLabel::Sad => "😢",
                MoodLabel::Anxious => "😰",
                MoodLabel::Angry => "😠",
                MoodLabel::Calm => "😌",
                MoodLabel::Confused => "😕",
            };
            (mood, glyph.to_string())
        })
        .collect()
}

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn moods(labels: [&str; 6]) -> MoodTable<String> {
    let [happy, sad, anxious, angry, calm, confused] = labels;
    MoodTable {
        happy: happy.to_string(),
        sad: sad.to_string(),
        anxious: anxious.to_string(),
        angry: angry.to_string(),
        calm: calm.to_string(),
        confused: confused.to_string(),
    }
}

// ============================================================================
// English
// ============================================================================

fn english() -> TemplateBundle {
    let general = [
        "Take a few slow, deep breaths",
        "Remember that you're not alone",
        "Reach out to someone you trust",
    ];
    TemplateBundle {
        ui: UiStrings {
            greeting: "Hello! I'm Saathi, your supportive companion. How are you feeling today?"
                .to_string(),
            mood_prompt: "Pick the mood that fits you best right now:".to_string(),
            input_placeholder: "Type your message...".to_string(),
            tips_header: "A few things that might help:".to_string(),
            language_changed: "Okay, I'll reply in English from now on.".to_string(),
            farewell: "Take care of yourself. I'm here whenever you want to talk.".to_string(),
        },
        moods: moods(["Happy", "Sad", "Anxious", "Angry", "Calm", "Confused"]),
        responses: CategoryTable {
            low_mood: texts(&[
                "I'm really sorry you're feeling low. It's okay to feel this way, and you don't have to go through it alone. Would you like to tell me what's on your mind?",
                "That sounds really hard. What you're feeling is valid, and I'm here to listen whenever you're ready.",
                "Thank you for trusting me with how you feel. Heavy emotions don't last forever, even when it seems that way. What has been weighing on you lately?",
            ]),
            anxious: texts(&[
                "It sounds like anxiety is weighing on you. Let's slow down together: breathe in for four counts, hold for four, and breathe out for four.",
                "Feeling anxious can be exhausting. Try to focus only on what you can control right now, one small step at a time.",
                "I hear that you're worried. Grounding can help: name five things you can see and four things you can touch.",
            ]),
            stressed: texts(&[
                "It sounds like you're carrying a lot right now. Those feelings are completely understandable. Let's take a moment to breathe together.",
                "Frustration often comes from feeling unheard. I'm here to listen. What would help you feel a little more in control right now?",
                "When everything feels intense, even a short break can help. Could you step away for a few minutes?",
            ]),
            generic_fallback: texts(&[
                "Thank you for sharing that with me. How are you feeling about everything right now?",
                "I appreciate you opening up. What's been on your mind lately?",
                "I'm here to listen and support you. Would you like to talk more about what's happening?",
            ]),
            positive_affect: texts(&[
                "That's wonderful to hear! What's been bringing you joy today?",
            ]),
            calm_affect: texts(&[
                "It's lovely that you're feeling calm. Moments of peace like this are worth savoring.",
            ]),
            acknowledgment: texts(&[
                "Thank you for telling me how you feel. Whatever you're going through, I'm here for you.",
            ]),
            crisis: texts(&[
                "I'm very concerned about what you're sharing. Your life has value and there are people who want to help. Please call emergency services at 112 or reach out to someone you trust right now.",
                "I can hear that you're in a lot of pain right now. Please get help immediately: call 112 or go to your nearest emergency room. You don't have to face this alone.",
            ]),
        },
        suggestions: CategoryTable {
            low_mood: texts(&[
                "Try a 5-minute mindfulness exercise",
                "Reach out to a trusted friend or family member",
                "Take a gentle walk outside",
                "Write down three things you're grateful for",
            ]),
            anxious: texts(&[
                "Focus on what you can control right now",
                "Try the 5-4-3-2-1 grounding technique",
                "Challenge anxious thoughts with evidence",
                "Connect with your support system",
            ]),
            stressed: texts(&[
                "Practice deep breathing for 2 minutes",
                "Try some physical exercise to release tension",
                "Write down your thoughts to process them",
                "Listen to calming music",
            ]),
            generic_fallback: texts(&general),
            positive_affect: texts(&[
                "Celebrate this positive moment",
                "Reflect on what contributed to these feelings",
                "Share this positivity with someone you care about",
                "Capture this moment in a journal",
            ]),
            calm_affect: texts(&general),
            acknowledgment: texts(&general),
            crisis: texts(&[
                "Call emergency services (112) immediately",
                "Go to the nearest hospital emergency room",
                "Call a crisis helpline for immediate support",
                "Stay with someone you trust and don't be alone",
            ]),
        },
    }
}

// ============================================================================
// Hindi
// ============================================================================

fn hindi() -> TemplateBundle {
    let general = [
        "कुछ धीमी, गहरी साँसें लें",
        "याद रखें, आप अकेले नहीं हैं",
        "किसी विश्वसनीय व्यक्ति से बात करें",
    ];
    TemplateBundle {
        ui: UiStrings {
            greeting: "नमस्ते! मैं साथी हूँ, आपका सहयोगी। आज आप कैसा महसूस कर रहे हैं?".to_string(),
            mood_prompt: "वह मूड चुनें जो अभी आप पर सबसे ज़्यादा लागू होता है:".to_string(),
            input_placeholder: "अपना संदेश लिखें...".to_string(),
            tips_header: "कुछ बातें जो मदद कर सकती हैं:".to_string(),
            language_changed: "ठीक है, अब से मैं हिन्दी में जवाब दूँगा।".to_string(),
            farewell: "अपना ख़याल रखें। जब भी बात करनी हो, मैं यहाँ हूँ।".to_string(),
        },
        moods: moods(["खुश", "उदास", "चिंतित", "गुस्सा", "शांत", "उलझन में"]),
        responses: CategoryTable {
            low_mood: texts(&[
                "मुझे दुख है कि आप उदास महसूस कर रहे हैं। ऐसा महसूस करना ठीक है, और आप अकेले नहीं हैं। क्या आप बताना चाहेंगे कि आपके मन में क्या चल रहा है?",
                "मैं समझ सकता हूँ कि आप मुश्किल दौर से गुज़र रहे हैं। आपकी भावनाएं मायने रखती हैं, और मैं सुनने के लिए यहाँ हूँ।",
                "आपने मुझसे अपनी बात साझा की, इसके लिए धन्यवाद। भारी भावनाएं हमेशा नहीं रहतीं। हाल में आपको क्या परेशान कर रहा है?",
            ]),
            anxious: texts(&[
                "लगता है चिंता आप पर भारी पड़ रही है। चलिए साथ में धीरे हो जाते हैं: चार गिनती तक साँस लें, चार तक रोकें, और चार तक छोड़ें।",
                "चिंता बहुत थका देने वाली हो सकती है। अभी सिर्फ़ उस पर ध्यान दें जो आपके नियंत्रण में है, एक समय में एक छोटा कदम।",
                "मैं समझ रहा हूँ कि आप फ़िक्र में हैं। पाँच चीज़ें गिनिए जो आप देख सकते हैं और चार जिन्हें आप छू सकते हैं।",
            ]),
            stressed: texts(&[
                "लगता है आप इस समय बहुत कुछ उठा रहे हैं। ये भावनाएं पूरी तरह समझ में आती हैं। आइए एक पल रुककर साथ में साँस लें।",
                "झुंझलाहट अक्सर तब आती है जब लगता है कि कोई हमारी नहीं सुन रहा। मैं सुनने के लिए यहाँ हूँ। अभी किस चीज़ से आपको थोड़ा नियंत्रण महसूस होगा?",
                "जब सब कुछ भारी लगे, तो छोटा सा विराम भी मदद करता है। क्या आप कुछ मिनट के लिए ब्रेक ले सकते हैं?",
            ]),
            generic_fallback: texts(&[
                "अपनी बात साझा करने के लिए धन्यवाद। अभी आप सब कुछ लेकर कैसा महसूस कर रहे हैं?",
                "मैं यहाँ आपकी बात सुनने और मदद करने के लिए हूँ। आपकी भावनाएं महत्वपूर्ण हैं।",
                "क्या आप इसके बारे में और बात करना चाहेंगे? मैं सुन रहा हूँ।",
            ]),
            positive_affect: texts(&[
                "यह सुनकर बहुत अच्छा लगा! आज आपको किस बात से खुशी मिली?",
            ]),
            calm_affect: texts(&[
                "यह अच्छी बात है कि आप शांत महसूस कर रहे हैं। सुकून के ऐसे पल संजोने लायक होते हैं।",
            ]),
            acknowledgment: texts(&[
                "अपनी भावनाएं बताने के लिए धन्यवाद। आप जो भी महसूस कर रहे हैं, मैं आपके साथ हूँ।",
            ]),
            crisis: texts(&[
                "मैं आपकी बात से बहुत चिंतित हूँ। आपका जीवन मूल्यवान है। कृपया तुरंत 112 पर कॉल करें या किसी विश्वसनीय व्यक्ति से संपर्क करें।",
                "मैं समझ सकता हूँ कि आप बहुत कष्ट में हैं। कृपया तुरंत मदद लें और 112 पर कॉल करें। आप अकेले नहीं हैं।",
            ]),
        },
        suggestions: CategoryTable {
            low_mood: texts(&[
                "5 मिनट का ध्यान करें",
                "किसी विश्वसनीय दोस्त या परिवार वाले से बात करें",
                "बाहर थोड़ा टहलने जाएं",
                "तीन बातें लिखें जिनके लिए आप आभारी हैं",
            ]),
            anxious: texts(&[
                "उस पर ध्यान दें जो अभी आपके नियंत्रण में है",
                "5-4-3-2-1 ग्राउंडिंग तकनीक आज़माएं",
                "घबराहट वाले विचारों को तथ्यों से परखें",
                "अपने करीबी लोगों से जुड़ें",
            ]),
            stressed: texts(&[
                "2 मिनट तक गहरी साँस लें",
                "तनाव कम करने के लिए थोड़ा व्यायाम करें",
                "अपने विचार लिखें",
                "शांत संगीत सुनें",
            ]),
            generic_fallback: texts(&general),
            positive_affect: texts(&[
                "इस अच्छे पल का जश्न मनाएं",
                "सोचें कि किस चीज़ से यह खुशी मिली",
                "यह खुशी किसी अपने के साथ बाँटें",
                "इस पल को डायरी में लिखें",
            ]),
            calm_affect: texts(&general),
            acknowledgment: texts(&general),
            crisis: texts(&[
                "तुरंत आपातकालीन सेवा (112) पर कॉल करें",
                "नज़दीकी अस्पताल के आपातकालीन विभाग में जाएं",
                "किसी हेल्पलाइन पर तुरंत बात करें",
                "किसी भरोसेमंद व्यक्ति के साथ रहें, अकेले न रहें",
            ]),
        },
    }
}

// ============================================================================
// Spanish
// ============================================================================

fn spanish() -> TemplateBundle {
    let general = [
        "Respira lenta y profundamente unas cuantas veces",
        "Recuerda que no estás solo",
        "Habla con alguien de confianza",
    ];
    TemplateBundle {
        ui: UiStrings {
            greeting: "¡Hola! Soy Saathi, tu compañero de apoyo. ¿Cómo te sientes hoy?".to_string(),
            mood_prompt: "Elige el estado de ánimo que mejor te describe ahora:".to_string(),
            input_placeholder: "Escribe tu mensaje...".to_string(),
            tips_header: "Algunas cosas que podrían ayudarte:".to_string(),
            language_changed: "De acuerdo, a partir de ahora responderé en español.".to_string(),
            farewell: "Cuídate mucho. Aquí estaré cuando quieras hablar.".to_string(),
        },
        moods: moods(["Feliz", "Triste", "Ansioso", "Enojado", "Tranquilo", "Confundido"]),
        responses: CategoryTable {
            low_mood: texts(&[
                "Siento mucho que te sientas decaído. Está bien sentirse así, y no tienes que pasar por esto solo. ¿Quieres contarme qué tienes en mente?",
                "Eso suena muy difícil. Lo que sientes es válido, y estoy aquí para escucharte cuando estés listo.",
                "Gracias por confiarme cómo te sientes. Las emociones pesadas no duran para siempre. ¿Qué te ha estado pesando últimamente?",
            ]),
            anxious: texts(&[
                "Parece que la ansiedad te está pesando. Vamos a ir despacio juntos: inhala contando hasta cuatro, sostén cuatro y exhala cuatro.",
                "Sentir ansiedad puede ser agotador. Intenta concentrarte solo en lo que puedes controlar ahora, un pequeño paso a la vez.",
                "Entiendo que estás preocupado. Anclarte puede ayudar: nombra cinco cosas que puedas ver y cuatro que puedas tocar.",
            ]),
            stressed: texts(&[
                "Parece que estás cargando con mucho ahora mismo. Esos sentimientos son completamente comprensibles. Tomemos un momento para respirar juntos.",
                "La frustración suele venir de sentir que nadie te escucha. Yo estoy aquí para escucharte. ¿Qué te ayudaría a sentir un poco más de control?",
                "Cuando todo se siente intenso, incluso un descanso corto ayuda. ¿Podrías apartarte unos minutos?",
            ]),
            generic_fallback: texts(&[
                "Gracias por compartir eso conmigo. ¿Cómo te sientes con todo en este momento?",
                "Agradezco que te abras conmigo. ¿Qué has tenido en mente últimamente?",
                "Estoy aquí para escucharte y apoyarte. ¿Te gustaría hablar más de lo que está pasando?",
            ]),
            positive_affect: texts(&[
                "¡Qué alegría escuchar eso! ¿Qué te ha hecho feliz hoy?",
            ]),
            calm_affect: texts(&[
                "Qué bien que te sientas tranquilo. Vale la pena disfrutar de momentos de paz como este.",
            ]),
            acknowledgment: texts(&[
                "Gracias por contarme cómo te sientes. Pase lo que pase, estoy aquí contigo.",
            ]),
            crisis: texts(&[
                "Me preocupa mucho lo que me cuentas. Tu vida tiene valor y hay personas que quieren ayudarte. Por favor, llama ahora a emergencias al 112 o busca a alguien de confianza.",
                "Puedo notar que estás sufriendo muchísimo. Por favor, busca ayuda inmediata: llama al 112 o acude a urgencias. No tienes que enfrentar esto solo.",
            ]),
        },
        suggestions: CategoryTable {
            low_mood: texts(&[
                "Haz un ejercicio de atención plena de 5 minutos",
                "Contacta a un amigo o familiar de confianza",
                "Sal a dar un paseo tranquilo",
                "Escribe tres cosas por las que estés agradecido",
            ]),
            anxious: texts(&[
                "Concéntrate en lo que puedes controlar ahora",
                "Prueba la técnica de anclaje 5-4-3-2-1",
                "Cuestiona los pensamientos ansiosos con evidencias",
                "Conecta con tu red de apoyo",
            ]),
            stressed: texts(&[
                "Practica la respiración profunda durante 2 minutos",
                "Haz algo de ejercicio para liberar tensión",
                "Escribe tus pensamientos para procesarlos",
                "Escucha música relajante",
            ]),
            generic_fallback: texts(&general),
            positive_affect: texts(&[
                "Celebra este momento positivo",
                "Piensa en qué contribuyó a que te sientas así",
                "Comparte esta alegría con alguien querido",
                "Guarda este momento en un diario",
            ]),
            calm_affect: texts(&general),
            acknowledgment: texts(&general),
            crisis: texts(&[
                "Llama a emergencias (112) de inmediato",
                "Acude a la sala de urgencias más cercana",
                "Llama a una línea de crisis para recibir apoyo",
                "Quédate con alguien de confianza, no estés solo",
            ]),
        },
    }
}

// ============================================================================
// French
// ============================================================================

fn french() -> TemplateBundle {
    let general = [
        "Prends quelques respirations lentes et profondes",
        "Rappelle-toi que tu n'es pas seul",
        "Parle à quelqu'un en qui tu as confiance",
    ];
    TemplateBundle {
        ui: UiStrings {
            greeting: "Bonjour ! Je suis Saathi, ton compagnon de soutien. Comment te sens-tu aujourd'hui ?"
                .to_string(),
            mood_prompt: "Choisis l'humeur qui te correspond le mieux en ce moment :".to_string(),
            input_placeholder: "Écris ton message...".to_string(),
            tips_header: "Quelques idées qui pourraient t'aider :".to_string(),
            language_changed: "D'accord, je répondrai en français à partir de maintenant."
                .to_string(),
            farewell: "Prends soin de toi. Je suis là dès que tu veux parler.".to_string(),
        },
        moods: moods(["Heureux", "Triste", "Anxieux", "En colère", "Calme", "Confus"]),
        responses: CategoryTable {
            low_mood: texts(&[
                "Je suis vraiment désolé que tu te sentes au plus bas. C'est normal de ressentir cela, et tu n'as pas à le traverser seul. Veux-tu me dire ce qui te préoccupe ?",
                "Ça a l'air vraiment difficile. Ce que tu ressens est légitime, et je suis là pour t'écouter quand tu seras prêt.",
                "Merci de me confier ce que tu ressens. Les émotions lourdes ne durent pas toujours. Qu'est-ce qui te pèse ces derniers temps ?",
            ]),
            anxious: texts(&[
                "On dirait que l'anxiété pèse sur toi. Ralentissons ensemble : inspire sur quatre temps, retiens quatre temps, puis expire sur quatre temps.",
                "L'anxiété peut être épuisante. Essaie de te concentrer seulement sur ce que tu peux contrôler maintenant, un petit pas à la fois.",
                "Je comprends que tu es inquiet. Te recentrer peut aider : nomme cinq choses que tu vois et quatre choses que tu peux toucher.",
            ]),
            stressed: texts(&[
                "On dirait que tu portes beaucoup en ce moment. Ces sentiments sont tout à fait compréhensibles. Prenons un moment pour respirer ensemble.",
                "La frustration vient souvent du sentiment de ne pas être entendu. Je suis là pour t'écouter. Qu'est-ce qui t'aiderait à te sentir un peu plus maître de la situation ?",
                "Quand tout semble intense, même une courte pause peut aider. Pourrais-tu t'éloigner quelques minutes ?",
            ]),
            generic_fallback: texts(&[
                "Merci de partager cela avec moi. Comment te sens-tu par rapport à tout ça en ce moment ?",
                "J'apprécie que tu t'ouvres à moi. Qu'est-ce qui t'occupe l'esprit ces temps-ci ?",
                "Je suis là pour t'écouter et te soutenir. Veux-tu en dire plus sur ce qui se passe ?",
            ]),
            positive_affect: texts(&[
                "Quel plaisir d'entendre ça ! Qu'est-ce qui t'a apporté de la joie aujourd'hui ?",
            ]),
            calm_affect: texts(&[
                "C'est agréable que tu te sentes calme. Ces moments de paix valent la peine d'être savourés.",
            ]),
            acknowledgment: texts(&[
                "Merci de me dire comment tu te sens. Quoi que tu traverses, je suis là pour toi.",
            ]),
            crisis: texts(&[
                "Ce que tu partages m'inquiète beaucoup. Ta vie a de la valeur et des personnes veulent t'aider. Appelle tout de suite les secours au 112 ou contacte quelqu'un de confiance.",
                "Je sens que tu souffres énormément en ce moment. Cherche de l'aide immédiatement : appelle le 112 ou rends-toi aux urgences les plus proches. Tu n'as pas à affronter cela seul.",
            ]),
        },
        suggestions: CategoryTable {
            low_mood: texts(&[
                "Fais un exercice de pleine conscience de 5 minutes",
                "Contacte un ami ou un proche de confiance",
                "Fais une petite promenade dehors",
                "Note trois choses pour lesquelles tu es reconnaissant",
            ]),
            anxious: texts(&[
                "Concentre-toi sur ce que tu peux contrôler maintenant",
                "Essaie la technique d'ancrage 5-4-3-2-1",
                "Confronte les pensées anxieuses aux faits",
                "Rapproche-toi de ton entourage",
            ]),
            stressed: texts(&[
                "Respire profondément pendant 2 minutes",
                "Fais un peu d'exercice pour relâcher la tension",
                "Écris tes pensées pour les mettre à distance",
                "Écoute une musique apaisante",
            ]),
            generic_fallback: texts(&general),
            positive_affect: texts(&[
                "Célèbre ce moment positif",
                "Réfléchis à ce qui a contribué à ce sentiment",
                "Partage cette bonne humeur avec quelqu'un que tu aimes",
                "Note ce moment dans un carnet",
            ]),
            calm_affect: texts(&general),
            acknowledgment: texts(&general),
            crisis: texts(&[
                "Appelle immédiatement les secours (112)",
                "Rends-toi aux urgences de l'hôpital le plus proche",
                "Appelle une ligne d'écoute de crise",
                "Reste avec une personne de confiance, ne reste pas seul",
            ]),
        },
    }
}
