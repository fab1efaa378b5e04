//! Bindings for the `AggregatorFacade` price-feed contract.

use alloy::sol;

/// JSON ABI of `AggregatorFacade`, as emitted by the Solidity compiler.
pub const ABI: &str = include_str!("../../abi/AggregatorFacade.json");

sol! {
    #![sol(all_derives)]
    /// Facade exposing the FluxAggregator's round data through the
    /// `AggregatorV2V3Interface` shape.
    #[allow(missing_docs)]
    #[sol(rpc, all_derives, bytecode = "608060405234801561001057600080fd5b5060405162000db238038062000db28339818101604052606081101561003557600080fd5b8101908080519060200190929190805190602001909291908051604051939291908464010000000082111561006957600080fd5b8382019150602082018581111561007f57600080fd5b825186600182028301116401000000008211171561009c57600080fd5b8083526020830192505050908051906020019080838360005b838110156100d05780820151818401526020810190506100b5565b50505050905090810190601f1680156100fd5780820380516001836020036101000a031916815260200191505b50604052505050826000806101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff16021790555081600060146101000a81548160ff021916908360ff160217905550806001908051906020019061017592919061017e565b50505050610223565b828054600181600116156101000203166002900490600052602060002090601f016020900481019282601f106101bf57805160ff19168380011785556101ed565b828001600101855582156101ed579182015b828111156101ec5782518255916020019190600101906101d1565b5b5090506101fa91906101fe565b5090565b61022091905b8082111561021c576000816000905550600101610204565b5090565b90565b610b7f80620002336000396000f3fe608060405234801561001057600080fd5b50600436106100a95760003560e01c80637284e416116100715780637284e416146101765780638205bf6a146101f95780639a6fc8f514610217578063b5ab58dc146102b1578063b633620c146102f3578063feaf968c14610335576100a9565b8063245a7bfc146100ae578063313ce567146100f857806350d25bcd1461011c57806354fd4d501461013a578063668a0f0214610158575b600080fd5b6100b661039f565b604051808273ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200191505060405180910390f35b6101006103c4565b604051808260ff1660ff16815260200191505060405180910390f35b6101246103d7565b6040518082815260200191505060405180910390f35b610142610480565b6040518082815260200191505060405180910390f35b610160610485565b6040518082815260200191505060405180910390f35b61017e61052e565b6040518080602001828103825283818151815260200191508051906020019080838360005b838110156101be5780820151818401526020810190506101a3565b50505050905090810190601f1680156101eb5780820380516001836020036101000a031916815260200191505b509250505060405180910390f35b6102016105cc565b6040518082815260200191505060405180910390f35b61024f6004803603602081101561022d57600080fd5b81019080803569ffffffffffffffffffff169060200190929190505050610675565b604051808669ffffffffffffffffffff1669ffffffffffffffffffff1681526020018581526020018481526020018381526020018269ffffffffffffffffffff1669ffffffffffffffffffff1681526020019550505050505060405180910390f35b6102dd600480360360208110156102c757600080fd5b8101908080359060200190929190505050610699565b6040518082815260200191505060405180910390f35b61031f6004803603602081101561030957600080fd5b810190808035906020019092919050505061074f565b6040518082815260200191505060405180910390f35b61033d610805565b604051808669ffffffffffffffffffff1669ffffffffffffffffffff1681526020018581526020018481526020018381526020018269ffffffffffffffffffff1669ffffffffffffffffffff1681526020019550505050505060405180910390f35b6000809054906101000a900473ffffffffffffffffffffffffffffffffffffffff1681565b600060149054906101000a900460ff1681565b60008060009054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff166350d25bcd6040518163ffffffff1660e01b815260040160206040518083038186803b15801561044057600080fd5b505afa158015610454573d6000803e3d6000fd5b505050506040513d602081101561046a57600080fd5b8101908080519060200190929190505050905090565b600281565b60008060009054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1663668a0f026040518163ffffffff1660e01b815260040160206040518083038186803b1580156104ee57600080fd5b505afa158015610502573d6000803e3d6000fd5b505050506040513d602081101561051857600080fd5b8101908080519060200190929190505050905090565b60018054600181600116156101000203166002900480601f0160208091040260200160405190810160405280929190818152602001828054600181600116156101000203166002900480156105c45780601f10610599576101008083540402835291602001916105c4565b820191906000526020600020905b8154815290600101906020018083116105a757829003601f168201915b505050505081565b60008060009054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16638205bf6a6040518163ffffffff1660e01b815260040160206040518083038186803b15801561063557600080fd5b505afa158015610649573d6000803e3d6000fd5b505050506040513d602081101561065f57600080fd5b8101908080519060200190929190505050905090565b6000806000806000610686866108c8565b9450945094509450945091939590929450565b60008060009054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1663b5ab58dc836040518263ffffffff1660e01b81526004018082815260200191505060206040518083038186803b15801561070d57600080fd5b505afa158015610721573d6000803e3d6000fd5b505050506040513d602081101561073757600080fd5b81019080805190602001909291905050509050919050565b60008060009054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1663b633620c836040518263ffffffff1660e01b81526004018082815260200191505060206040518083038186803b1580156107c357600080fd5b505afa1580156107d7573d6000803e3d6000fd5b505050506040513d60208110156107ed57600080fd5b81019080805190602001909291905050509050919050565b60008060008060006108b76000809054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1663668a0f026040518163ffffffff1660e01b815260040160206040518083038186803b15801561087757600080fd5b505afa15801561088b573d6000803e3d6000fd5b505050506040513d60208110156108a157600080fd5b81019080805190602001909291905050506108c8565b945094509450945094509091929394565b60008060008060008060009054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1663b5ab58dc876040518263ffffffff1660e01b8152600401808269ffffffffffffffffffff16815260200191505060206040518083038186803b15801561094e57600080fd5b505afa158015610962573d6000803e3d6000fd5b505050506040513d602081101561097857600080fd5b810190808051906020019092919050505093506000809054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1663b633620c876040518263ffffffff1660e01b8152600401808269ffffffffffffffffffff16815260200191505060206040518083038186803b158015610a0957600080fd5b505afa158015610a1d573d6000803e3d6000fd5b505050506040513d6020811015610a3357600080fd5b810190808051906020019092919050505067ffffffffffffffff169150600082116040518060400160405280600f81526020017f4e6f20646174612070726573656e74000000000000000000000000000000000081525090610b30576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825283818151815260200191508051906020019080838360005b83811015610af5578082015181840152602081019050610ada565b50505050905090810190601f168015610b225780820380516001836020036101000a031916815260200191505b509250505060405180910390fd5b508584838489945094509450945094509193959092945056fea2646970667358221220a822653af921158ca9b15557d4814111b34541df93bc60601648a3d086980fa064736f6c63430006060033")]
    contract AggregatorFacade {
        event AnswerUpdated(int256 indexed current, uint256 indexed roundId, uint256 updatedAt);
        event NewRound(uint256 indexed roundId, address indexed startedBy, uint256 startedAt);

        constructor(address _aggregator, uint8 _decimals, string memory _description);

        function aggregator() external view returns (address);
        function decimals() external view returns (uint8);
        function description() external view returns (string memory);
        function getAnswer(uint256 _roundId) external view returns (int256);
        function getRoundData(uint80 _roundId)
            external
            view
            returns (
                uint80 roundId,
                int256 answer,
                uint256 startedAt,
                uint256 updatedAt,
                uint80 answeredInRound
            );
        function getTimestamp(uint256 _roundId) external view returns (uint256);
        function latestAnswer() external view returns (int256);
        function latestRound() external view returns (uint256);
        function latestRoundData()
            external
            view
            returns (
                uint80 roundId,
                int256 answer,
                uint256 startedAt,
                uint256 updatedAt,
                uint80 answeredInRound
            );
        function latestTimestamp() external view returns (uint256);
        function version() external view returns (uint256);
    }
}
