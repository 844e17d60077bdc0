//! Prompt templates for the text operations. Each one keeps the answer in
//! the language of its input and carries English and Arabic examples.

const SAMPLE_EN: &str = "Solar energy is one of the most important renewable energy sources. It is converted into electricity using solar panels, which absorb sunlight and convert it into electrical energy. Solar energy is used in many applications, such as generating electricity for homes and businesses, and powering small electronic devices.";

const SAMPLE_AR: &str = "تعتبر الطاقة الشمسية واحدة من أهم مصادر الطاقة المتجددة. يتم تحويل الطاقة الشمسية إلى كهرباء باستخدام الألواح الشمسية، والتي تعمل على امتصاص أشعة الشمس وتحويلها إلى طاقة كهربائية. تستخدم الطاقة الشمسية في العديد من التطبيقات مثل توليد الكهرباء للمنازل والشركات، وتشغيل الأجهزة الإلكترونية الصغيرة.";

const OFF_TOPIC_EN: &str =
    "Sorry, I cannot answer this question as it is not within the context of the provided text.";

const OFF_TOPIC_AR: &str = "عذرًا، لا يمكنني الإجابة على هذا السؤال لأنه ليس في نفس سياق النص المقدم.";

pub fn summarize(input_text: &str) -> String {
    format!(
        "You are a professional summarization assistant. Summarize the text below clearly, concisely and in an organized way.
Rules:
1. Write the summary in the same language as the input text.
2. Do not add information that is not in the original text.
3. Cover every key point.

Example input (English):
{SAMPLE_EN}

Example summary (English):
Solar energy is a key renewable energy source. It is converted into electricity via solar panels that absorb sunlight. It is used in various applications, including powering homes, businesses, and small electronic devices.

Example input (Arabic):
{SAMPLE_AR}

Example summary (Arabic):
الطاقة الشمسية هي مصدر مهم للطاقة المتجددة. يتم تحويلها إلى كهرباء عبر الألواح الشمسية التي تمتص أشعة الشمس. تُستخدم في تطبيقات متنوعة مثل توليد الكهرباء للمنازل والشركات وتشغيل الأجهزة الإلكترونية الصغيرة.

Input:
{input_text}

Summary:
"
    )
}

pub fn main_points(input_text: &str) -> String {
    format!(
        "You are a professional assistant. Extract the main points of the text below as a numbered list (1, 2, 3, ...).
Rules:
1. Write the points in the same language as the input text.
2. Do not add information that is not in the original text.
3. Keep the points concise and cover every key aspect.

Example input (English):
{SAMPLE_EN}

Example main points (English):
1. Solar energy is a key renewable energy source.
2. It is converted into electricity via solar panels.
3. It is used in various applications, including powering homes, businesses, and small electronic devices.

Example input (Arabic):
{SAMPLE_AR}

Example main points (Arabic):
1. الطاقة الشمسية هي مصدر مهم للطاقة المتجددة.
2. يتم تحويلها إلى كهرباء عبر الألواح الشمسية.
3. تُستخدم في تطبيقات متنوعة مثل توليد الكهرباء للمنازل والشركات.

Input:
{input_text}

Main Points:
"
    )
}

pub fn chat(input_text: &str, question: &str) -> String {
    format!(
        "You are a knowledgeable assistant. Answer the user's question using only the text below.
Rules:
1. Answer in the language of the question: Arabic questions get Arabic answers, English questions get English answers.
2. If the question is unrelated to the text, reply with exactly:
   - \"{OFF_TOPIC_AR}\" for an Arabic question
   - \"{OFF_TOPIC_EN}\" for an English question
3. If the question is vague, ask for clarification or give a general answer based on the text.
4. Do not add information that is not in the text.

Text:
{input_text}

Question:
{question}

Answer:
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_input() {
        assert!(summarize("alpha beta").contains("Input:\nalpha beta\n\nSummary:"));
        assert!(main_points("gamma").contains("Input:\ngamma\n\nMain Points:"));

        let prompt = chat("the text", "what?");
        assert!(prompt.contains("Text:\nthe text"));
        assert!(prompt.contains("Question:\nwhat?"));
        assert!(prompt.contains(OFF_TOPIC_EN));
    }
}
