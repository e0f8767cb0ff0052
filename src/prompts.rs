//! Prompt templates dispatched to the generative model
//!
//! Pure string construction, no I/O. All model-facing wording lives
//! here; the session state machine only decides which template to
//! render. Difficulty and mode policy is restated inside the prompt
//! text because the remote model sees nothing else.

use crate::knowledge::Topic;
use crate::session::{Difficulty, Mode};

/// Per-tier teaching guidance, restated wherever difficulty matters.
const DIFFICULTY_GUIDANCE: &str = "For 'easy', use simpler terms and focus on basic concepts.\n\
    For 'medium', introduce more complex ideas and terminology.\n\
    For 'hard', challenge the student with advanced concepts, edge cases, and deeper analysis.";

/// Introduction template, doubling as the system prompt for a fresh
/// dialogue. Names the topic, its subtopics, and the active policies,
/// then asks what the student already knows.
pub fn introduction(topic: Topic, difficulty: Difficulty, mode: Mode) -> String {
    format!(
        "You are a teaching assistant specializing in Data Structures and Algorithms, \
         particularly in {topic}. Your goal is to help the student understand {topic}.\n\
         Focus on concepts like: {subtopics}.\n\
         The current difficulty level is set to {difficulty}. Adjust your explanations accordingly.\n\
         For 'easy', use simpler terms and basic concepts. For 'medium', introduce more complex ideas.\n\
         For 'hard', challenge the student with advanced concepts and edge cases.\n\
         The current mode is {mode}. In Socratic mode, guide through questions. In Q&A mode, provide direct answers.\n\
         Start by asking what the student already knows about {topic}, keeping in mind the {difficulty} difficulty level.",
        subtopics = topic.subtopics().join(", "),
    )
}

/// Socratic-probe template: analyze the student's answer and respond
/// with a guiding question, never a direct answer.
pub fn socratic_probe(topic: Topic, difficulty: Difficulty, user_text: &str) -> String {
    format!(
        "The student's response was: \"{user_text}\"\n\
         Analyze their understanding and formulate a Socratic question to deepen their knowledge \
         of {topic}. Remember to guide them towards understanding rather than \
         providing direct answers. If they seem confused, break down the concept further.\n\
         If they show understanding, challenge them with a more advanced aspect of {topic}.\n\
         Keep in mind that the current difficulty level is {difficulty}.\n\
         {DIFFICULTY_GUIDANCE}",
    )
}

/// Direct-answer template: answer plainly, offer code when asked,
/// gently redirect off-topic questions back to the active topic.
pub fn direct_answer(topic: Topic, difficulty: Difficulty, user_text: &str) -> String {
    format!(
        "The student's question was: \"{user_text}\"\n\
         Provide a clear, concise, and direct answer about {topic}.\n\
         If the question asks for code, include a relevant code snippet.\n\
         Do not use the Socratic method or ask the student to think about the process themselves.\n\
         If the question is not directly related to {topic}, provide a brief answer \
         and gently redirect to the current topic.\n\
         Keep in mind that the current difficulty level is {difficulty}.",
    )
}

/// Difficulty-change template: announce the new tier and continue the
/// lesson at that level.
pub fn difficulty_change(new_difficulty: Difficulty) -> String {
    format!(
        "The difficulty level has been changed to {new_difficulty}. Adjust your teaching approach accordingly.\n\
         {DIFFICULTY_GUIDANCE}\n\
         Inform the student about the change and ask an appropriate question to continue the lesson at the new difficulty level.",
    )
}

/// Mode-switch template: acknowledge the change and set the tone.
pub fn mode_switch(topic: Topic, new_mode: Mode) -> String {
    format!(
        "The conversation mode has been switched to {new_mode} mode.\n\
         For Socratic mode, use questions to guide the student's learning about {topic}.\n\
         For Q&A mode, provide direct and concise answers about {topic}.\n\
         Respond with an appropriate message to acknowledge the mode change and set the tone for the new mode.",
    )
}

/// Summary-and-options template: recap the dialogue so far, assess the
/// student, and offer a lettered menu of ways to continue.
pub fn check_understanding(topic: Topic) -> String {
    format!(
        "Based on the conversation so far about {topic}, provide the following:\n\
         1. A brief summary (2-3 sentences) of what we've discussed and the main concepts covered.\n\
         2. An assessment of the student's current understanding, noting any areas of strength or confusion.\n\
         3. A question or set of options for the student to choose from, such as:\n\
         a) Would you like to dive deeper into any specific aspect of {topic}?\n\
         b) Are you ready to move on to a related topic? If so, I can suggest some options.\n\
         c) Do you feel you've grasped the main concepts and want to conclude this topic?\n\
         d) Are there any parts of {topic} you'd like me to explain differently?\n\
         Present this information clearly and concisely, maintaining a supportive and encouraging tone.",
    )
}

/// Conclusion template: key-point summary and an encouraging close.
pub fn conclusion(topic: Topic) -> String {
    format!(
        "Provide a concise summary of the key points discussed about {topic}.\n\
         Highlight the main concepts learned, any problem-solving strategies introduced, and suggestions for further study.\n\
         End with an encouraging message about applying this knowledge to real-world programming challenges.",
    )
}
