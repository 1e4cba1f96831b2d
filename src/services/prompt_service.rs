//! Prompt 构建服务
//!
//! 根据科目、语言和题目来源生成系统消息与用户提示词。

use crate::llm::ChatMessage;

/// 支持的提示词语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语
    #[default]
    En,
    /// 印尼语
    Id,
    /// 西班牙语
    Es,
}

impl Language {
    /// 根据语言代码选择模板语言，未知代码回退到英语
    pub fn from_code(code: &str) -> Self {
        match code {
            "id" => Language::Id,
            "es" => Language::Es,
            _ => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
            Language::Es => "es",
        }
    }

    /// 导师身份的系统消息
    fn system_message(self) -> &'static str {
        match self {
            Language::En => "You are a knowledgeable tutor who helps students understand concepts and solve problems step by step.",
            Language::Id => "Anda adalah tutor yang berpengetahuan luas yang membantu siswa memahami konsep dan memecahkan masalah langkah demi langkah.",
            Language::Es => "Eres un tutor experto que ayuda a los estudiantes a comprender conceptos y resolver problemas paso a paso.",
        }
    }

    /// 题目来源描述
    fn source_phrase(self, is_file: bool) -> &'static str {
        match (self, is_file) {
            (Language::En, true) => "a PDF file",
            (Language::En, false) => "the student",
            (Language::Id, true) => "file PDF",
            (Language::Id, false) => "siswa",
            (Language::Es, true) => "un archivo PDF",
            (Language::Es, false) => "el estudiante",
        }
    }

    fn user_prompt(self, text: &str, subject: &str, is_file: bool) -> String {
        let source = self.source_phrase(is_file);
        match self {
            Language::En => format!(
                "You are a helpful tutor. Please help solve this {subject} question from {source}:\n\n{text}\n\nProvide a clear, step-by-step solution."
            ),
            Language::Id => format!(
                "Anda adalah tutor yang membantu. Mohon bantu selesaikan soal {subject} ini dari {source}:\n\n{text}\n\nBerikan solusi yang jelas, langkah demi langkah."
            ),
            Language::Es => format!(
                "Eres un tutor servicial. Por favor, ayuda a resolver esta pregunta de {subject} de {source}:\n\n{text}\n\nProporciona una solución clara, paso a paso."
            ),
        }
    }
}

/// 一次补全请求所需的提示词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBundle {
    pub system_message: String,
    pub user_prompt: String,
}

impl PromptBundle {
    /// 转为聊天消息：系统消息在前，用户提示词在后
    pub fn into_messages(self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system_message),
            ChatMessage::user(self.user_prompt),
        ]
    }
}

/// 构建提示词
///
/// 题目文本原样嵌入，不截断也不转义。
pub fn build_prompt(text: &str, subject: &str, language_code: &str, is_file: bool) -> PromptBundle {
    let language = Language::from_code(language_code);
    PromptBundle {
        system_message: language.system_message().to_string(),
        user_prompt: language.user_prompt(text, subject, is_file),
    }
}
