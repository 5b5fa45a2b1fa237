//! 请求票据
//!
//! 每个发出的 API 请求都带一张 `Ticket { lane, seq }`。
//! 同一条 lane 上新的请求会取代旧的请求：旧请求的结果回来时，
//! `complete` 返回 `false`，Update 层据此丢弃过期结果。

/// 请求所属的逻辑动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    List,
    Search,
    Create,
    Update,
    Delete,
}

impl Lane {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        match self {
            Lane::List => 0,
            Lane::Search => 1,
            Lane::Create => 2,
            Lane::Update => 3,
            Lane::Delete => 4,
        }
    }

    /// 读请求可以被新请求取消（执行器会 abort 旧任务）
    pub fn is_supersedable(self) -> bool {
        matches!(self, Lane::List | Lane::Search)
    }
}

/// 请求票据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub lane: Lane,
    pub seq: u64,
}

/// 记录每条 lane 上当前有效的请求
#[derive(Debug, Default)]
pub struct RequestTracker {
    next_seq: u64,
    current: [Option<u64>; Lane::COUNT],
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发出新请求，取代该 lane 上之前的请求
    pub fn issue(&mut self, lane: Lane) -> Ticket {
        self.next_seq += 1;
        self.current[lane.index()] = Some(self.next_seq);
        Ticket {
            lane,
            seq: self.next_seq,
        }
    }

    /// 是否为该 lane 上最新的请求
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current[ticket.lane.index()] == Some(ticket.seq)
    }

    /// 结果到达：返回是否为最新请求，是则清除该 lane 的在途标记
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if self.is_current(ticket) {
            self.current[ticket.lane.index()] = None;
            true
        } else {
            false
        }
    }

    /// 该 lane 上是否有在途请求
    pub fn in_flight(&self, lane: Lane) -> bool {
        self.current[lane.index()].is_some()
    }
}
