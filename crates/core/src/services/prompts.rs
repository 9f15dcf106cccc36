//! Prompt texts and localized placeholders.
//!
//! Every answer is requested in Korean, the single target locale of the
//! dashboard. Placeholders shown in place of failed answers use the same locale.

/// Shown in the macro card until the first summary arrives.
pub const MACRO_LOADING: &str = "시장 요약을 불러오는 중...";

/// Macro summary shown when the gateway returns nothing or fails.
pub const MACRO_FALLBACK: &str = "현재 중립적인 시장 심리가 지배적입니다.";

/// Analysis body when the gateway answered with empty text.
pub const ANALYSIS_EMPTY: &str = "현재 분석을 생성할 수 없습니다.";

/// Analysis body when the gateway call failed.
pub const ANALYSIS_FAILED: &str = "분석에 실패했습니다. 다시 시도해 주세요.";

pub const MACRO_SYSTEM_INSTRUCTION: &str =
    "당신은 JP.Invest의 수석 매크로 전략가입니다. 반드시 한국어로 답변하세요.";

pub const MACRO_PROMPT: &str =
    "현재 글로벌 시장 심리와 주요 동인에 대한 2문장 분량의 거시 경제 요약을 한국어로 제공해 주세요.";

pub const NEWS_PROMPT: &str = "블룸버그(Bloomberg), 로이터(Reuters), CNBC 등 글로벌 주요 경제 소스에서 \
'지난 3일간' 가장 조회수가 높고 파급력이 큰 주요 뉴스 12개를 찾아주세요. 반드시 한국어로 답변하되, \
각 뉴스는 제목, 2줄 분량의 핵심 요약, 출처, 날짜를 포함해야 합니다. \
조회수와 중요도가 높은 순서대로 정렬해 주세요.";

pub const CALENDAR_PROMPT: &str = "이번 주와 다음 주에 예정된 글로벌 주요 경제 일정을 찾아주세요. \
1. 주요 대형주(NVDA, AAPL, MSFT, TSLA 등) 실적 발표 일정 \
2. 미국 연준(Fed) 금리 결정 및 FOMC 의사록 \
3. 미국 소비자물가지수(CPI), 생산자물가지수(PPI), 고용지표 등 시장에 큰 영향을 주는 핵심 지표 발표일. \
모든 정보는 한국어로 제공하고, 중요도가 높은 순서로 10-12개 정도 제공해 주세요.";

pub fn analysis_prompt(query: &str) -> String {
    format!(
        "다음 경제 관련 질문에 대해 전문 투자자의 관점에서 분석해 주세요: {query}. \
깊이 있는 통찰력, 역사적 맥락, 그리고 잠재적인 미래 영향을 포함해야 합니다. \
모든 답변은 한국어로 작성해 주세요."
    )
}

pub fn company_search_prompt(query: &str) -> String {
    format!(
        "미국 증권거래소(NYSE, NASDAQ)에 상장된 기업 중 \"{query}\"와(과) 관련된 기업 5곳을 찾아주세요. \
반드시 한국어로 답변하되, 티커(ticker), 기업명(name), 섹터(sector), \
현재가(price - 대략적인 최신가), 간단한 설명(description)을 포함한 JSON 형식으로 제공해 주세요."
    )
}
