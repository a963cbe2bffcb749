use std::{collections::HashMap, sync::Arc, time::Duration};

use rand::{rngs::StdRng, SeedableRng};
use tokio::{runtime::Handle, sync::mpsc, task::JoinHandle};

use crate::assistant::message::{Message, MessageId, MessageLog, Sender};
use crate::assistant::script::GREETING;
use crate::assistant::strategy::ReplyStrategy;
use crate::config::AssistantConfig;
use crate::errors::AssistantError;
use crate::utils::Clock;

/// Notification that a scheduled reply is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTicket {
    pub ticket: u64,
    pub in_reply_to: Option<MessageId>,
}

/// One chat session with the scripted assistant.
///
/// The session is the only writer of its [`MessageLog`]. Timer tasks spawned
/// by [`AssistantSession::schedule_reply`] never touch the log: they send a
/// [`ReplyTicket`] once their delay has elapsed, and the reply is appended when
/// the session receives it through [`AssistantSession::next_reply`],
/// [`AssistantSession::settle`] or [`AssistantSession::drain_ready`].
///
/// Overlapping submissions each schedule their own reply, and replies with
/// different delays may land in any order relative to one another.
pub struct AssistantSession {
    log: MessageLog,
    candidates: Vec<String>,
    strategy: Box<dyn ReplyStrategy>,
    rng: StdRng,
    clock: Arc<dyn Clock>,
    reply_delay: Duration,
    tickets_tx: mpsc::UnboundedSender<ReplyTicket>,
    tickets_rx: mpsc::UnboundedReceiver<ReplyTicket>,
    pending: HashMap<u64, JoinHandle<()>>,
    next_ticket: u64,
}

impl AssistantSession {
    pub fn new(
        candidates: Vec<String>,
        strategy: Box<dyn ReplyStrategy>,
        rng: StdRng,
        reply_delay: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AssistantError> {
        if candidates.is_empty() {
            return Err(AssistantError::NoCandidates);
        }
        let (tickets_tx, tickets_rx) = mpsc::unbounded_channel();
        Ok(Self {
            log: MessageLog::new(),
            candidates,
            strategy,
            rng,
            clock,
            reply_delay,
            tickets_tx,
            tickets_rx,
            pending: HashMap::new(),
            next_ticket: 0,
        })
    }

    pub fn from_config(
        config: &AssistantConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AssistantError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(
            config.replies.clone(),
            config.policy.strategy(),
            rng,
            config.reply_delay(),
            clock,
        )
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// True while at least one reply is scheduled but not yet appended.
    pub fn is_composing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Appends the assistant's opening message.
    pub fn greet(&mut self) -> MessageId {
        let now = self.clock.now();
        self.log.append(Sender::Assistant, GREETING.to_string(), now)
    }

    /// Appends a user message and schedules a reply after the configured delay.
    ///
    /// Outside a tokio runtime this fails with [`AssistantError::NoRuntime`];
    /// blank text fails with [`AssistantError::EmptyInput`]. Neither appends
    /// or schedules anything.
    pub fn submit(&mut self, text: &str) -> Result<MessageId, AssistantError> {
        let runtime = current_runtime()?;
        let id = self.log.submit(text, self.clock.now())?;
        self.spawn_timer(&runtime, Some(id), self.reply_delay);
        Ok(id)
    }

    /// Starts a timer that requests one assistant reply after `delay`.
    ///
    /// Returns immediately with the ticket number of the scheduled reply.
    pub fn schedule_reply(
        &mut self,
        in_reply_to: Option<MessageId>,
        delay: Duration,
    ) -> Result<u64, AssistantError> {
        let runtime = current_runtime()?;
        Ok(self.spawn_timer(&runtime, in_reply_to, delay))
    }

    fn spawn_timer(
        &mut self,
        runtime: &Handle,
        in_reply_to: Option<MessageId>,
        delay: Duration,
    ) -> u64 {
        self.next_ticket += 1;
        let ticket = ReplyTicket {
            ticket: self.next_ticket,
            in_reply_to,
        };
        let tx = self.tickets_tx.clone();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver only disappears together with the session.
            let _ = tx.send(ticket);
        });
        self.pending.insert(ticket.ticket, handle);
        tracing::debug!(
            ticket = ticket.ticket,
            delay_ms = delay.as_millis() as u64,
            "scheduled assistant reply"
        );
        ticket.ticket
    }

    /// Waits for the next due reply and appends it.
    pub async fn next_reply(&mut self) -> Result<MessageId, AssistantError> {
        loop {
            if self.pending.is_empty() {
                return Err(AssistantError::NoPendingReply);
            }
            let Some(ticket) = self.tickets_rx.recv().await else {
                return Err(AssistantError::NoPendingReply);
            };
            if let Some(id) = self.complete(ticket) {
                return Ok(id);
            }
        }
    }

    /// Waits until every pending reply has been appended.
    pub async fn settle(&mut self) -> Vec<MessageId> {
        let mut appended = Vec::with_capacity(self.pending.len());
        while let Ok(id) = self.next_reply().await {
            appended.push(id);
        }
        appended
    }

    /// Appends every reply whose timer has already fired, without waiting.
    pub fn drain_ready(&mut self) -> Vec<MessageId> {
        let mut appended = Vec::new();
        while let Ok(ticket) = self.tickets_rx.try_recv() {
            if let Some(id) = self.complete(ticket) {
                appended.push(id);
            }
        }
        appended
    }

    /// Cancels every pending reply and returns how many were cancelled.
    pub fn shutdown(&mut self) -> usize {
        let cancelled = self.pending.len();
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
        while self.tickets_rx.try_recv().is_ok() {}
        if cancelled > 0 {
            tracing::debug!(cancelled, "cancelled pending assistant replies");
        }
        cancelled
    }

    fn complete(&mut self, ticket: ReplyTicket) -> Option<MessageId> {
        // Tickets of cancelled replies are no longer pending and are dropped.
        self.pending.remove(&ticket.ticket)?;
        let index = self.strategy.pick(&self.candidates, &mut self.rng) % self.candidates.len();
        let text = self.candidates[index].clone();
        let id = self.log.append(Sender::Assistant, text, self.clock.now());
        tracing::debug!(
            ticket = ticket.ticket,
            in_reply_to = ticket.in_reply_to.map(MessageId::value),
            message = id.value(),
            "appended assistant reply"
        );
        Some(id)
    }
}

fn current_runtime() -> Result<Handle, AssistantError> {
    Handle::try_current().map_err(|_| AssistantError::NoRuntime)
}

impl Drop for AssistantSession {
    fn drop(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::strategy::RoundRobin;
    use crate::utils::FixedClock;
    use chrono::{TimeZone, Utc};
    use tokio::task::AbortHandle;
    use tokio::time::{timeout, Instant};

    const DELAY: Duration = Duration::from_millis(1500);

    fn session() -> AssistantSession {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
        AssistantSession::new(
            vec!["first".into(), "second".into()],
            Box::new(RoundRobin::default()),
            StdRng::seed_from_u64(7),
            DELAY,
            Arc::new(clock),
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_candidate_set() {
        let result = AssistantSession::new(
            Vec::new(),
            Box::new(RoundRobin::default()),
            StdRng::seed_from_u64(7),
            DELAY,
            Arc::new(FixedClock(Utc::now())),
        );
        assert!(matches!(result, Err(AssistantError::NoCandidates)));
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_delay_and_follows_user_message() {
        let mut session = session();
        let user_id = session.submit("Hello").unwrap();
        assert_eq!(session.messages().len(), 1);
        assert!(session.is_composing());

        let early = timeout(DELAY - Duration::from_millis(1), session.next_reply()).await;
        assert!(early.is_err(), "reply must not arrive before the delay");
        assert_eq!(session.messages().len(), 1);

        let reply_id = session.next_reply().await.unwrap();
        assert!(user_id < reply_id);
        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[1].sender, Sender::Assistant);
        assert_eq!(messages[1].text, "first");
        assert!(!session.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn blank_submit_schedules_nothing() {
        let mut session = session();
        assert_eq!(session.submit("   "), Err(AssistantError::EmptyInput));
        assert!(session.messages().is_empty());
        assert_eq!(session.pending_replies(), 0);
        assert_eq!(
            session.next_reply().await,
            Err(AssistantError::NoPendingReply)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_submissions_each_get_a_reply() {
        let mut session = session();
        session.submit("one").unwrap();
        session.submit("two").unwrap();
        assert_eq!(session.pending_replies(), 2);

        let start = Instant::now();
        let appended = session.settle().await;
        assert!(start.elapsed() >= DELAY);
        assert_eq!(appended.len(), 2);

        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::User, Sender::Assistant, Sender::Assistant]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn shorter_delay_may_overtake_earlier_reply() {
        let mut session = session();
        let slow = session.schedule_reply(None, Duration::from_secs(5)).unwrap();
        let fast = session.schedule_reply(None, Duration::from_secs(1)).unwrap();
        assert!(slow < fast);

        session.next_reply().await.unwrap();
        assert_eq!(session.pending_replies(), 1);
        session.next_reply().await.unwrap();
        assert_eq!(session.messages().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_pending_replies() {
        let mut session = session();
        session.submit("Hello").unwrap();
        assert_eq!(session.shutdown(), 1);
        assert!(!session.is_composing());

        tokio::time::sleep(DELAY * 2).await;
        assert!(session.drain_ready().is_empty());
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_session_aborts_its_timers() {
        let mut session = session();
        session.submit("one").unwrap();
        session.submit("two").unwrap();
        let timers: Vec<AbortHandle> =
            session.pending.values().map(JoinHandle::abort_handle).collect();
        assert_eq!(timers.len(), 2);
        assert!(!timers.iter().any(AbortHandle::is_finished));

        let start = Instant::now();
        drop(session);
        for _ in 0..16 {
            if timers.iter().all(AbortHandle::is_finished) {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(timers.iter().all(AbortHandle::is_finished));
        assert!(start.elapsed() < DELAY, "timers ended by abort, not by firing");
    }

    #[test]
    fn submit_outside_a_runtime_is_rejected() {
        let mut session = session();
        assert_eq!(session.submit("Hello"), Err(AssistantError::NoRuntime));
        assert_eq!(
            session.schedule_reply(None, DELAY),
            Err(AssistantError::NoRuntime)
        );
        assert!(session.messages().is_empty());
        assert!(!session.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn drain_ready_collects_fired_timers() {
        let mut session = session();
        session.submit("Hello").unwrap();
        assert!(session.drain_ready().is_empty());

        tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
        let appended = session.drain_ready();
        assert_eq!(appended.len(), 1);
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn greeting_is_an_assistant_message() {
        let mut session = session();
        let id = session.greet();
        let message = session.log().get(id).unwrap();
        assert_eq!(message.sender, Sender::Assistant);
        assert_eq!(message.text, GREETING);
    }
}
